//! Appointment booking core: the store reducer, the form controller, the toast
//! lifecycle, and the session that ties them to one UI event loop.

pub mod draft;
pub mod form;
pub mod row_menu;
pub mod seed;
pub mod session;
pub mod store;
pub mod toast;
pub mod validation;

pub use draft::{AppointmentDraft, DraftEdit};
pub use form::{FormController, FormMode, ModeEffect, SubmitOutcome};
pub use row_menu::RowMenu;
pub use seed::{load_appointments_file, parse_appointments, seed_appointments, SeedError};
pub use session::BookingSession;
pub use store::{AppointmentStore, StoreAction, StoreState};
pub use toast::{ToastLifecycle, TOAST_DISPLAY_WINDOW};
