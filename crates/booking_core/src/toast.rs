use std::time::{Duration, Instant};

use tracing::debug;

use crate::store::AppointmentStore;

/// How long a toast stays visible before it clears itself.
pub const TOAST_DISPLAY_WINDOW: Duration = Duration::from_millis(3000);

/// Schedules the automatic clear of whatever toast the store holds.
///
/// The host calls [`ToastLifecycle::observe`] after mutating the store and
/// [`ToastLifecycle::poll`] from its event loop. A toast set or replaced since
/// the last observation gets a fresh window; a cleared toast drops the pending
/// deadline.
#[derive(Debug, Clone, Default)]
pub struct ToastLifecycle {
    observed_revision: u64,
    deadline: Option<Instant>,
}

impl ToastLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, store: &AppointmentStore, now: Instant) {
        let revision = store.toast_revision();
        if revision == self.observed_revision {
            return;
        }
        self.observed_revision = revision;
        self.deadline = store.toast().map(|_| now + TOAST_DISPLAY_WINDOW);
    }

    /// Clears the toast once its window has elapsed. Returns true when it did.
    pub fn poll(&mut self, store: &mut AppointmentStore, now: Instant) -> bool {
        self.observe(store, now);
        match self.deadline {
            Some(deadline) if now >= deadline => {
                store.clear_toast();
                self.observe(store, now);
                debug!("toast expired");
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
#[path = "tests/toast_tests.rs"]
mod tests;
