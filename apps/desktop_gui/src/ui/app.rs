use std::time::Instant;

use booking_core::BookingSession;
use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use shared::toast::Toast;

use crate::controller::events::UiEvent;
use crate::controller::orchestration::{apply_ui_event, dispatch_ui_event};
use crate::ui::panels::{show_appointments_table, show_booking_form, EventQueue};
use crate::ui::theme::toast_colors;

const UI_EVENT_QUEUE_CAPACITY: usize = 256;
const WELCOME_HEADING: &str = "Welcome to Gradious Doctor Appointment Booking";

pub struct BookingDeskApp {
    session: BookingSession,
    ui_tx: Sender<UiEvent>,
    ui_rx: Receiver<UiEvent>,
    status: Option<String>,
}

impl BookingDeskApp {
    pub fn new(session: BookingSession) -> Self {
        let (ui_tx, ui_rx) = bounded::<UiEvent>(UI_EVENT_QUEUE_CAPACITY);
        Self {
            session,
            ui_tx,
            ui_rx,
            status: None,
        }
    }

    fn process_ui_events(&mut self) {
        let now = Instant::now();
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_ui_event(&mut self.session, event, now);
        }
        self.session.tick(now);
    }

    /// Ctrl/Cmd+Enter submits; Escape leaves edit mode, or dismisses the toast.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (submit, escape) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if submit {
            dispatch_ui_event(&self.ui_tx, UiEvent::Submit, &mut self.status);
        }
        if escape {
            if self.session.form().mode().is_editing() {
                dispatch_ui_event(&self.ui_tx, UiEvent::CancelEdit, &mut self.status);
            } else if self.session.store().toast().is_some() {
                dispatch_ui_event(&self.ui_tx, UiEvent::DismissToast, &mut self.status);
            }
        }
    }

    fn schedule_repaint(&self, ctx: &egui::Context) {
        if !self.ui_rx.is_empty() {
            ctx.request_repaint();
        } else if let Some(remaining) = self
            .session
            .toast_lifecycle()
            .time_remaining(Instant::now())
        {
            ctx.request_repaint_after(remaining);
        }
    }
}

fn show_toast_banner(ui: &mut egui::Ui, toast: &Toast, events: &mut EventQueue<'_>) {
    let (fill, stroke) = toast_colors(toast.kind);

    egui::Frame::NONE
        .fill(fill)
        .stroke(stroke)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(&toast.message).color(egui::Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        events.push(UiEvent::DismissToast);
                    }
                });
            });
        });
}

impl eframe::App for BookingDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.handle_shortcuts(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut events = EventQueue {
                tx: &self.ui_tx,
                status: &mut self.status,
            };

            ui.heading(WELCOME_HEADING);
            ui.add_space(8.0);

            if let Some(toast) = self.session.store().toast() {
                show_toast_banner(ui, toast, &mut events);
                ui.add_space(8.0);
            }

            show_booking_form(ui, self.session.form(), &mut events);
            ui.add_space(16.0);
            ui.separator();

            show_appointments_table(
                ui,
                self.session.store().appointments(),
                self.session.row_menu(),
                &mut events,
            );

            if let Some(status) = events.status.clone() {
                ui.separator();
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(status).weak());
                    if ui.small_button("Clear").clicked() {
                        *events.status = None;
                    }
                });
            }
        });

        self.schedule_repaint(ctx);
    }
}

