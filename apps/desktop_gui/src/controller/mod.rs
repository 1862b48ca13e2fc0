//! Controller layer: UI events and their translation into booking session calls.

pub mod events;
pub mod orchestration;
