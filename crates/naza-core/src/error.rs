//! # Error Types
//!
//! Validation errors for naza-core.
//!
//! ## Where Errors Can and Cannot Come From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Numeric core (money, totals)   →  TOTAL, never errors                  │
//! │  Form validation (this module)  →  ValidationError                      │
//! │  Application layer (apps/cli)   →  AppError (wraps these + I/O)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amount parsing and formatting deliberately have no error path: malformed
//! text maps to zero (see [`crate::money::parse_amount`]). Required-field
//! checks are the only thing that can reject a form, and they live here so
//! the numeric core stays total.

use thiserror::Error;

/// Input validation errors.
///
/// Messages are user-facing; the application joins them into the "please
/// fix the following" list shown before a preview is generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "client name".to_string(),
        };
        assert_eq!(err.to_string(), "client name is required");

        let err = ValidationError::TooLong {
            field: "invoice number".to_string(),
            max: 50,
        };
        assert_eq!(err.to_string(), "invoice number must be at most 50 characters");
    }
}
