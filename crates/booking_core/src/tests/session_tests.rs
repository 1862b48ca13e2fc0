use std::time::Duration;

use super::*;
use crate::{form::FormMode, toast::TOAST_DISPLAY_WINDOW};
use shared::{
    domain::{Gender, VisitType},
    toast::ToastKind,
};

fn session() -> BookingSession {
    BookingSession::new(AppointmentStore::seeded())
}

#[test]
fn row_menu_closes_when_editing() {
    let mut session = session();
    session.toggle_row_menu(AppointmentId(1));
    assert!(session.row_menu().is_open(AppointmentId(1)));

    session.edit(AppointmentId(1));

    assert_eq!(session.row_menu().open_row(), None);
    assert_eq!(session.form().mode(), FormMode::Editing(AppointmentId(1)));
    assert_eq!(session.form().draft().name, "John Doe");
}

#[test]
fn delete_removes_record_shows_toast_and_closes_menu() {
    let now = Instant::now();
    let mut session = session();
    session.toggle_row_menu(AppointmentId(2));

    session.delete(AppointmentId(2), now);

    assert_eq!(session.store().appointments().len(), 1);
    assert_eq!(session.row_menu().open_row(), None);
    let toast = session.store().toast().expect("toast");
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, "Appointment deleted");
    assert_eq!(
        session.toast_lifecycle().deadline(),
        Some(now + TOAST_DISPLAY_WINDOW)
    );
}

#[test]
fn failed_submit_toast_expires_on_tick() {
    let now = Instant::now();
    let mut session = session();

    assert!(session.submit(now).is_err());
    assert!(session.store().toast().is_some());
    assert!(!session.tick(now + Duration::from_millis(1000)));
    assert!(session.tick(now + TOAST_DISPLAY_WINDOW));
    assert!(session.store().toast().is_none());
}

#[test]
fn second_toast_before_expiry_gets_full_window() {
    let now = Instant::now();
    let mut session = session();

    assert!(session.submit(now).is_err());
    let later = now + Duration::from_millis(2500);
    session.delete(AppointmentId(1), later);

    assert!(!session.tick(now + TOAST_DISPLAY_WINDOW));
    assert_eq!(
        session.store().toast().map(|t| t.message.as_str()),
        Some("Appointment deleted")
    );
    assert!(session.tick(later + TOAST_DISPLAY_WINDOW));
}

#[test]
fn dismiss_clears_toast_and_deadline() {
    let now = Instant::now();
    let mut session = session();
    session.delete(AppointmentId(1), now);

    session.dismiss_toast(now + Duration::from_millis(10));

    assert!(session.store().toast().is_none());
    assert_eq!(session.toast_lifecycle().deadline(), None);
}

#[test]
fn cancel_edit_returns_to_booking_with_empty_draft() {
    let mut session = session();
    session.edit(AppointmentId(2));
    session.edit_field(DraftEdit::Gender(Some(Gender::Female)));

    session.cancel_edit();

    assert_eq!(session.form().mode(), FormMode::Creating);
    assert!(session.form().draft().is_empty_template());
    assert_eq!(session.store().edited_id(), None);
    assert_eq!(
        session.store().appointment(AppointmentId(2)).map(|a| a.gender),
        Some(Gender::Male)
    );
}

#[test]
fn bulk_loaded_store_drives_ids_from_loaded_records() {
    let now = Instant::now();
    let mut loaded = AppointmentStore::seeded().appointments().to_vec();
    loaded[1].id = AppointmentId(40);
    let mut session = BookingSession::new(AppointmentStore::new(loaded));

    for edit in [
        DraftEdit::Name("Lata".to_string()),
        DraftEdit::Age("63".to_string()),
        DraftEdit::Phone("0123456789".to_string()),
        DraftEdit::DrName("Dr. Nair".to_string()),
        DraftEdit::VisitDate("2024-09-09".to_string()),
        DraftEdit::VisitTime("1:00 PM".to_string()),
        DraftEdit::VisitType(Some(VisitType::Revisit)),
        DraftEdit::Gender(Some(Gender::Female)),
    ] {
        session.edit_field(edit);
    }

    assert_eq!(
        session.submit(now),
        Ok(SubmitOutcome::Booked(AppointmentId(41)))
    );
}
