use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a draft is refused at submission. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Please fill all the fields")]
    EmptyFields,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please enter a valid time in HH:MM AM/PM format")]
    InvalidTime,
}

