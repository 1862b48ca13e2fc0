//! One booking desk: the store plus the controllers that are allowed to write
//! to it. Every handler takes the event time so the toast window is measured
//! from the moment the outcome was shown.

use std::time::Instant;

use shared::{domain::AppointmentId, error::ValidationError, toast::Toast};
use tracing::info;

use crate::{
    draft::DraftEdit,
    form::{FormController, SubmitOutcome, DELETED_MESSAGE},
    row_menu::RowMenu,
    store::AppointmentStore,
    toast::ToastLifecycle,
};

#[derive(Debug, Clone)]
pub struct BookingSession {
    store: AppointmentStore,
    form: FormController,
    row_menu: RowMenu,
    toasts: ToastLifecycle,
}

impl BookingSession {
    pub fn new(store: AppointmentStore) -> Self {
        let mut form = FormController::new();
        form.sync_mode(&store);
        Self {
            store,
            form,
            row_menu: RowMenu::default(),
            toasts: ToastLifecycle::new(),
        }
    }

    pub fn store(&self) -> &AppointmentStore {
        &self.store
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn row_menu(&self) -> &RowMenu {
        &self.row_menu
    }

    pub fn toast_lifecycle(&self) -> &ToastLifecycle {
        &self.toasts
    }

    pub fn edit_field(&mut self, edit: DraftEdit) {
        self.form.edit_field(edit);
    }

    pub fn submit(&mut self, now: Instant) -> Result<SubmitOutcome, ValidationError> {
        let outcome = self.form.submit(&mut self.store);
        self.toasts.observe(&self.store, now);
        if let Ok(outcome) = outcome {
            info!(?outcome, "appointment saved");
        }
        outcome
    }

    pub fn toggle_row_menu(&mut self, id: AppointmentId) {
        self.row_menu.toggle(id);
    }

    pub fn edit(&mut self, id: AppointmentId) {
        self.form.begin_edit(&mut self.store, id);
        self.row_menu.close();
    }

    /// Abandons the current edit and goes back to booking mode.
    pub fn cancel_edit(&mut self) {
        self.store.clear_edited_id();
        self.form.sync_mode(&self.store);
    }

    pub fn delete(&mut self, id: AppointmentId, now: Instant) {
        self.store.delete_appointment(id);
        self.store.set_toast(Toast::success(DELETED_MESSAGE));
        self.toasts.observe(&self.store, now);
        self.row_menu.close();
        info!(appointment_id = id.0, "appointment deleted");
    }

    pub fn dismiss_toast(&mut self, now: Instant) {
        self.store.clear_toast();
        self.toasts.observe(&self.store, now);
    }

    /// Advances timers. Returns true when a toast expired on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.toasts.poll(&mut self.store, now)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
