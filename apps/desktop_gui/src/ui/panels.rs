//! Booking form and appointments table. Panels only read session state and
//! report user intent as [`UiEvent`]s.

use booking_core::{DraftEdit, FormController, RowMenu};
use chrono::{Local, NaiveDate};
use crossbeam_channel::Sender;
use eframe::egui;
use shared::domain::{Appointment, Gender, VisitType};

use crate::controller::{events::UiEvent, orchestration::dispatch_ui_event};
use crate::ui::theme::{visit_type_color, DELETE_TEXT};

const FIELD_WIDTH: f32 = 220.0;
const FIELD_HEIGHT: f32 = 30.0;
const VISIT_DATE_FORMAT: &str = "%Y-%m-%d";

pub struct EventQueue<'a> {
    pub tx: &'a Sender<UiEvent>,
    pub status: &'a mut Option<String>,
}

impl EventQueue<'_> {
    pub fn push(&mut self, event: UiEvent) {
        dispatch_ui_event(self.tx, event, self.status);
    }
}

fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn parse_visit_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), VISIT_DATE_FORMAT).ok()
}

fn patient_summary(appointment: &Appointment) -> String {
    format!("{} yrs, {}", appointment.age, appointment.gender.label())
}

fn draft_text_field(
    ui: &mut egui::Ui,
    id: &'static str,
    hint: &str,
    current: &str,
    edit: fn(String) -> DraftEdit,
    events: &mut EventQueue<'_>,
) {
    let mut value = current.to_string();
    let response = ui.add_sized(
        [FIELD_WIDTH, FIELD_HEIGHT],
        egui::TextEdit::singleline(&mut value)
            .id_salt(id)
            .hint_text(hint),
    );
    if response.changed() {
        events.push(UiEvent::DraftEdited(edit(value)));
    }
}

#[allow(clippy::too_many_arguments)]
fn draft_select_field<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &'static str,
    placeholder: &'static str,
    current: Option<T>,
    options: &[T],
    label: fn(T) -> &'static str,
    edit: fn(Option<T>) -> DraftEdit,
    events: &mut EventQueue<'_>,
) {
    let mut selected = current;
    egui::ComboBox::from_id_salt(id)
        .width(FIELD_WIDTH)
        .selected_text(selected.map_or(placeholder, label))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, None, placeholder);
            for option in options {
                ui.selectable_value(&mut selected, Some(*option), label(*option));
            }
        });
    if selected != current {
        events.push(UiEvent::DraftEdited(edit(selected)));
    }
}

fn visit_date_field(ui: &mut egui::Ui, current: &str, events: &mut EventQueue<'_>) {
    draft_text_field(
        ui,
        "visit_date",
        "Visit Date* (YYYY-MM-DD)",
        current,
        DraftEdit::VisitDate,
        events,
    );

    let mut picked = parse_visit_date(current).unwrap_or_else(|| Local::now().date_naive());
    let before = picked;
    let response = ui.add(egui_extras::DatePickerButton::new(&mut picked).id_salt("visit_date_picker"));
    if response.changed() || picked != before {
        events.push(UiEvent::DraftEdited(DraftEdit::VisitDate(
            picked.format(VISIT_DATE_FORMAT).to_string(),
        )));
    }
}

pub fn show_booking_form(ui: &mut egui::Ui, form: &FormController, events: &mut EventQueue<'_>) {
    let draft = form.draft();

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(12.0, 10.0);

        draft_text_field(ui, "name", "Patient Name*", &draft.name, DraftEdit::Name, events);
        draft_text_field(
            ui,
            "age",
            "Patient Age*",
            &draft.age,
            |value| DraftEdit::Age(digits_only(&value)),
            events,
        );
        draft_text_field(ui, "phone", "Patient Number*", &draft.phone, DraftEdit::Phone, events);
        draft_text_field(ui, "dr_name", "Doctor Name*", &draft.dr_name, DraftEdit::DrName, events);
        draft_select_field(
            ui,
            "gender",
            "Select Male/Female",
            draft.gender,
            &Gender::ALL,
            Gender::label,
            DraftEdit::Gender,
            events,
        );
        visit_date_field(ui, &draft.visit_date, events);
        draft_text_field(
            ui,
            "visit_time",
            "Visit Time (e.g. 06:00 PM)",
            &draft.visit_time,
            DraftEdit::VisitTime,
            events,
        );
        draft_select_field(
            ui,
            "visit_type",
            "Select Visit Type",
            draft.visit_type,
            &VisitType::ALL,
            VisitType::label,
            DraftEdit::VisitType,
            events,
        );
    });

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        let submit = egui::Button::new(egui::RichText::new(form.submit_label()).strong())
            .min_size(egui::vec2(180.0, 34.0));
        if ui.add(submit).clicked() {
            events.push(UiEvent::Submit);
        }
        if form.mode().is_editing() && ui.button("Cancel").clicked() {
            events.push(UiEvent::CancelEdit);
        }
    });
}

fn visit_type_badge(ui: &mut egui::Ui, visit_type: VisitType) {
    egui::Frame::NONE
        .fill(visit_type_color(visit_type))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(visit_type.label()).color(egui::Color32::WHITE));
        });
}

fn show_appointment_row(
    ui: &mut egui::Ui,
    appointment: &Appointment,
    menu_open: bool,
    events: &mut EventQueue<'_>,
) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(&appointment.name).strong().size(15.0));
        ui.label(egui::RichText::new(patient_summary(appointment)).weak());
    });

    visit_type_badge(ui, appointment.visit_type);

    ui.vertical(|ui| {
        ui.label(egui::RichText::new(&appointment.visit_time).strong());
        ui.label(egui::RichText::new(&appointment.visit_date).weak());
    });

    ui.vertical(|ui| {
        ui.label(&appointment.phone);
        ui.label(egui::RichText::new("contact").weak().small());
    });

    ui.label(&appointment.dr_name);

    ui.vertical(|ui| {
        if ui.button("...").on_hover_text("Actions").clicked() {
            events.push(UiEvent::ToggleRowMenu(appointment.id));
        }
        if menu_open {
            ui.horizontal(|ui| {
                if ui.button("Edit").clicked() {
                    events.push(UiEvent::EditRow(appointment.id));
                }
                if ui
                    .button(egui::RichText::new("Delete").color(DELETE_TEXT))
                    .clicked()
                {
                    events.push(UiEvent::DeleteRow(appointment.id));
                }
            });
        }
    });
}

pub fn show_appointments_table(
    ui: &mut egui::Ui,
    appointments: &[Appointment],
    row_menu: &RowMenu,
    events: &mut EventQueue<'_>,
) {
    if appointments.is_empty() {
        ui.label(egui::RichText::new("No appointments booked").weak());
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("appointments_table")
            .striped(true)
            .num_columns(6)
            .spacing([28.0, 12.0])
            .show(ui, |ui| {
                for header in ["Patient", "Status", "Appointment", "Phone", "Doctor", "Actions"] {
                    ui.label(egui::RichText::new(header).strong());
                }
                ui.end_row();

                for appointment in appointments {
                    show_appointment_row(ui, appointment, row_menu.is_open(appointment.id), events);
                    ui.end_row();
                }
            });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_core::seed_appointments;

    #[test]
    fn age_input_keeps_only_digits() {
        assert_eq!(digits_only("4a2 "), "42");
        assert_eq!(digits_only("-7.5"), "75");
        assert_eq!(digits_only(""), "");
    }

    #[test]
    fn visit_date_parses_iso_dates_only() {
        assert_eq!(
            parse_visit_date("2021-02-02"),
            NaiveDate::from_ymd_opt(2021, 2, 2)
        );
        assert_eq!(parse_visit_date("02/02/2021"), None);
        assert_eq!(parse_visit_date(""), None);
    }

    #[test]
    fn patient_summary_shows_age_and_gender() {
        let seed = seed_appointments();
        assert_eq!(patient_summary(&seed[0]), "28 yrs, Male");
    }
}
