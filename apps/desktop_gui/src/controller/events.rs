//! Events raised by the booking window, applied by the controller between frames.

use booking_core::DraftEdit;
use shared::domain::AppointmentId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    DraftEdited(DraftEdit),
    Submit,
    CancelEdit,
    ToggleRowMenu(AppointmentId),
    EditRow(AppointmentId),
    DeleteRow(AppointmentId),
    DismissToast,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::DraftEdited(_) => "draft_edited",
            UiEvent::Submit => "submit",
            UiEvent::CancelEdit => "cancel_edit",
            UiEvent::ToggleRowMenu(_) => "toggle_row_menu",
            UiEvent::EditRow(_) => "edit_row",
            UiEvent::DeleteRow(_) => "delete_row",
            UiEvent::DismissToast => "dismiss_toast",
        }
    }
}
