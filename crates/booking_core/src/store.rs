//! In-memory appointment store driven by a single reducer.
//!
//! Every mutation is a [`StoreAction`] applied by [`reduce`]. The named methods
//! on [`AppointmentStore`] are thin dispatch wrappers so callers never touch the
//! state fields directly.

use shared::{
    domain::{Appointment, AppointmentId, NewAppointment},
    toast::Toast,
};
use tracing::debug;

use crate::seed::seed_appointments;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    AddAppointment(NewAppointment),
    /// Replaces the record with the same id in place. Unknown ids are ignored.
    UpdateAppointment(Appointment),
    /// Removes the record with this id. Unknown ids are ignored.
    DeleteAppointment(AppointmentId),
    SetEditedId(AppointmentId),
    ClearEditedId,
    SetToast(Toast),
    ClearToast,
    SetAppointments(Vec<Appointment>),
}

impl StoreAction {
    fn name(&self) -> &'static str {
        match self {
            StoreAction::AddAppointment(_) => "add_appointment",
            StoreAction::UpdateAppointment(_) => "update_appointment",
            StoreAction::DeleteAppointment(_) => "delete_appointment",
            StoreAction::SetEditedId(_) => "set_edited_id",
            StoreAction::ClearEditedId => "clear_edited_id",
            StoreAction::SetToast(_) => "set_toast",
            StoreAction::ClearToast => "clear_toast",
            StoreAction::SetAppointments(_) => "set_appointments",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    pub appointments: Vec<Appointment>,
    pub edited_id: Option<AppointmentId>,
    pub toast: Option<Toast>,
    /// Bumped on every toast set or clear, including a set with an identical toast.
    pub toast_revision: u64,
}

/// Id for the next added record: highest current id plus one, or 1 when empty.
///
/// Recomputed from the current contents, so deleting the highest record makes
/// its id available again.
pub fn next_id(appointments: &[Appointment]) -> AppointmentId {
    appointments
        .iter()
        .map(|appointment| appointment.id.0)
        .max()
        .map_or(AppointmentId(1), |max| AppointmentId(max + 1))
}

pub fn reduce(state: &mut StoreState, action: StoreAction) {
    match action {
        StoreAction::AddAppointment(draft) => {
            let id = next_id(&state.appointments);
            state.appointments.push(draft.with_id(id));
        }
        StoreAction::UpdateAppointment(record) => {
            if let Some(slot) = state
                .appointments
                .iter_mut()
                .find(|appointment| appointment.id == record.id)
            {
                *slot = record;
            }
        }
        StoreAction::DeleteAppointment(id) => {
            state.appointments.retain(|appointment| appointment.id != id);
        }
        StoreAction::SetEditedId(id) => state.edited_id = Some(id),
        StoreAction::ClearEditedId => state.edited_id = None,
        StoreAction::SetToast(toast) => {
            state.toast = Some(toast);
            state.toast_revision = state.toast_revision.wrapping_add(1);
        }
        StoreAction::ClearToast => {
            state.toast = None;
            state.toast_revision = state.toast_revision.wrapping_add(1);
        }
        StoreAction::SetAppointments(appointments) => state.appointments = appointments,
    }
}

#[derive(Debug, Clone)]
pub struct AppointmentStore {
    state: StoreState,
}

impl Default for AppointmentStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl AppointmentStore {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self {
            state: StoreState {
                appointments,
                ..StoreState::default()
            },
        }
    }

    /// Store holding the two example bookings.
    pub fn seeded() -> Self {
        Self::new(seed_appointments())
    }

    pub fn dispatch(&mut self, action: StoreAction) {
        let name = action.name();
        reduce(&mut self.state, action);
        debug!(
            action = name,
            appointments = self.state.appointments.len(),
            edited_id = ?self.state.edited_id,
            "store action applied"
        );
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.state.appointments
    }

    pub fn appointment(&self, id: AppointmentId) -> Option<&Appointment> {
        self.state
            .appointments
            .iter()
            .find(|appointment| appointment.id == id)
    }

    pub fn edited_id(&self) -> Option<AppointmentId> {
        self.state.edited_id
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.state.toast.as_ref()
    }

    pub fn toast_revision(&self) -> u64 {
        self.state.toast_revision
    }

    /// Appends the booking and returns the id it was given.
    pub fn add_appointment(&mut self, draft: NewAppointment) -> AppointmentId {
        let id = next_id(&self.state.appointments);
        self.dispatch(StoreAction::AddAppointment(draft));
        id
    }

    pub fn update_appointment(&mut self, record: Appointment) {
        self.dispatch(StoreAction::UpdateAppointment(record));
    }

    pub fn delete_appointment(&mut self, id: AppointmentId) {
        self.dispatch(StoreAction::DeleteAppointment(id));
    }

    pub fn set_edited_id(&mut self, id: AppointmentId) {
        self.dispatch(StoreAction::SetEditedId(id));
    }

    pub fn clear_edited_id(&mut self) {
        self.dispatch(StoreAction::ClearEditedId);
    }

    pub fn set_toast(&mut self, toast: Toast) {
        self.dispatch(StoreAction::SetToast(toast));
    }

    pub fn clear_toast(&mut self) {
        self.dispatch(StoreAction::ClearToast);
    }

    pub fn set_appointments(&mut self, appointments: Vec<Appointment>) {
        self.dispatch(StoreAction::SetAppointments(appointments));
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
