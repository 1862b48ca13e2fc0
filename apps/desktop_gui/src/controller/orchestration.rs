//! Queueing UI events and applying them to the booking session in order.

use std::time::Instant;

use booking_core::BookingSession;
use crossbeam_channel::{Sender, TrySendError};

use crate::controller::events::UiEvent;

pub fn dispatch_ui_event(ui_tx: &Sender<UiEvent>, event: UiEvent, status: &mut Option<String>) {
    let event_name = event.name();
    match ui_tx.try_send(event) {
        Ok(()) => tracing::debug!(event = event_name, "queued ui event"),
        Err(TrySendError::Full(_)) => {
            *status = Some("UI event queue is full; please retry".to_string());
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = Some("Booking controller disconnected; restart the app".to_string());
        }
    }
}

pub fn apply_ui_event(session: &mut BookingSession, event: UiEvent, now: Instant) {
    match event {
        UiEvent::DraftEdited(edit) => session.edit_field(edit),
        UiEvent::Submit => {
            // Refusals already surface as an error toast.
            let _ = session.submit(now);
        }
        UiEvent::CancelEdit => session.cancel_edit(),
        UiEvent::ToggleRowMenu(id) => session.toggle_row_menu(id),
        UiEvent::EditRow(id) => session.edit(id),
        UiEvent::DeleteRow(id) => session.delete(id, now),
        UiEvent::DismissToast => session.dismiss_toast(now),
    }
}
