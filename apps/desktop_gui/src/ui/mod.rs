//! UI layer for the booking window: app shell, panels, and theme colors.

pub mod app;
pub mod panels;
pub mod theme;

pub use app::BookingDeskApp;
