//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Required field is missing or empty
    Empty { field: &'static str },

    /// Field falls short of the minimum length
    TooShort { field: &'static str, min: usize },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., email)
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} is required", field),
            Self::TooShort { field, min } => {
                write!(f, "{} must be at least {} characters", field, min)
            }
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "email",
            max: 255,
        };
        assert_eq!(
            err.to_string(),
            "email exceeds maximum length of 255 characters"
        );

        let err = ValidationError::TooShort {
            field: "name",
            min: 2,
        };
        assert_eq!(err.to_string(), "name must be at least 2 characters");
    }
}
