use shared::domain::AppointmentId;

/// Which row, if any, has its Edit/Delete menu open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMenu {
    open: Option<AppointmentId>,
}

impl RowMenu {
    pub fn toggle(&mut self, id: AppointmentId) {
        self.open = if self.open == Some(id) { None } else { Some(id) };
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn open_row(&self) -> Option<AppointmentId> {
        self.open
    }

    pub fn is_open(&self, id: AppointmentId) -> bool {
        self.open == Some(id)
    }
}
