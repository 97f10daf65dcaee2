//! # Application Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / Vec<ValidationError>             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (this module) ← One displayable message per failure          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  main prints the message and exits non-zero                            │
//! │                                                                         │
//! │  The numeric core never contributes here: parsing and formatting       │
//! │  amounts is total and cannot fail.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use naza_core::ValidationError;

/// Application errors shown to the user.
#[derive(Debug, Error)]
pub enum AppError {
    /// File could not be read or written.
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// The form document is not valid JSON for an invoice form.
    #[error("Invalid form document: {0}")]
    Form(#[from] serde_json::Error),

    /// The form failed required-field validation. Carries every failure so
    /// the user can fix the whole form in one pass.
    #[error("Please fix the following errors:\n{}", format_validation(.0))]
    Validation(Vec<ValidationError>),

    /// The command line was malformed.
    #[error("Usage error: {0} (try --help)")]
    Usage(String),
}

/// Result type for CLI operations.
pub type AppResult<T> = Result<T, AppError>;

/// Joins validation messages one per line, matching the error list the
/// form frontend shows.
fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_join_one_per_line() {
        let err = AppError::Validation(vec![
            ValidationError::Required {
                field: "Client name".to_string(),
            },
            ValidationError::Required {
                field: "Invoice date".to_string(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Please fix the following errors:\nClient name is required\nInvoice date is required"
        );
    }
}
