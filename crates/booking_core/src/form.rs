//! Form controller: owns the draft, tracks the create/edit mode, and turns a
//! submission into the matching store mutation.

use shared::{domain::AppointmentId, error::ValidationError, toast::Toast};
use tracing::{debug, warn};

use crate::{
    draft::{AppointmentDraft, DraftEdit},
    store::AppointmentStore,
};

pub const BOOKED_MESSAGE: &str = "Appointment booked successfully";
pub const UPDATED_MESSAGE: &str = "Appointment updated successfully";
pub const DELETED_MESSAGE: &str = "Appointment deleted";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Creating,
    Editing(AppointmentId),
}

impl FormMode {
    pub fn from_edited_id(edited_id: Option<AppointmentId>) -> Self {
        edited_id.map_or(FormMode::Creating, FormMode::Editing)
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormMode::Creating => "Book Appointment",
            FormMode::Editing(_) => "Update Appointment",
        }
    }

    pub fn is_editing(self) -> bool {
        matches!(self, FormMode::Editing(_))
    }
}

/// Effects run when the mode changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeEffect {
    /// Leaving edit mode restores the empty template.
    ResetDraft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Booked(AppointmentId),
    Updated(AppointmentId),
}

#[derive(Debug, Clone)]
pub struct FormController {
    draft: AppointmentDraft,
    mode: FormMode,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            draft: AppointmentDraft::default(),
            mode: FormMode::Creating,
        }
    }

    pub fn draft(&self) -> &AppointmentDraft {
        &self.draft
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn submit_label(&self) -> &'static str {
        self.mode.submit_label()
    }

    pub fn edit_field(&mut self, edit: DraftEdit) {
        self.draft.apply(edit);
    }

    /// Re-derives the mode from the store's edited id and runs the transition
    /// effect, if any.
    pub fn sync_mode(&mut self, store: &AppointmentStore) -> Option<ModeEffect> {
        let next = FormMode::from_edited_id(store.edited_id());
        let previous = std::mem::replace(&mut self.mode, next);

        match (previous, next) {
            (FormMode::Editing(_), FormMode::Creating) => {
                self.draft = AppointmentDraft::default();
                debug!("left edit mode; draft reset");
                Some(ModeEffect::ResetDraft)
            }
            _ => None,
        }
    }

    /// Loads the record into the draft (when it exists) and marks it as edited.
    pub fn begin_edit(&mut self, store: &mut AppointmentStore, id: AppointmentId) {
        if let Some(record) = store.appointment(id) {
            self.draft = AppointmentDraft::from(record);
        } else {
            warn!(appointment_id = id.0, "edit requested for unknown appointment");
        }
        store.set_edited_id(id);
        self.sync_mode(store);
    }

    /// Validates the draft and books or updates depending on the mode. Every
    /// outcome, including a refusal, leaves a toast in the store.
    pub fn submit(
        &mut self,
        store: &mut AppointmentStore,
    ) -> Result<SubmitOutcome, ValidationError> {
        self.sync_mode(store);

        let booking = match self.draft.validate() {
            Ok(booking) => booking,
            Err(err) => {
                warn!(reason = ?err, "submission refused");
                store.set_toast(Toast::from(err));
                return Err(err);
            }
        };

        match self.mode {
            FormMode::Editing(id) => {
                store.update_appointment(booking.with_id(id));
                store.clear_edited_id();
                store.set_toast(Toast::success(UPDATED_MESSAGE));
                self.sync_mode(store);
                Ok(SubmitOutcome::Updated(id))
            }
            FormMode::Creating => {
                let id = store.add_appointment(booking);
                store.set_toast(Toast::success(BOOKED_MESSAGE));
                self.draft = AppointmentDraft::default();
                Ok(SubmitOutcome::Booked(id))
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
