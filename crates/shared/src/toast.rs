use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}

impl From<ValidationError> for Toast {
    fn from(value: ValidationError) -> Self {
        Self::error(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_become_error_toasts_with_fixed_messages() {
        let toast = Toast::from(ValidationError::InvalidTime);
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(
            toast.message,
            "Please enter a valid time in HH:MM AM/PM format"
        );
        assert_eq!(
            Toast::from(ValidationError::EmptyFields).message,
            "Please fill all the fields"
        );
        assert_eq!(
            Toast::from(ValidationError::InvalidPhone).message,
            "Please enter a valid phone number"
        );
    }
}
