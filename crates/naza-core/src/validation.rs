//! # Validation Module
//!
//! Required-field validation for the invoice form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form Frontend (TypeScript)                                   │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Per-field rules                                                   │
//! │  └── validate_form collects EVERY failure, not just the first,         │
//! │      so the user fixes the whole form in one pass                      │
//! │                                                                         │
//! │  Amount fields are NOT validated here: reading them is total           │
//! │  (garbage counts as zero), so they can never block a preview.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use naza_core::validation::{validate_client_name, validate_invoice_no};
//!
//! validate_client_name("Adaobi O.").unwrap();
//! validate_invoice_no("INV-26-412").unwrap();
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::types::InvoiceForm;
use crate::{MAX_CLIENT_NAME_LEN, MAX_INVOICE_NO_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates the client name ("BILL TO" block).
///
/// ## Rules
/// - Must not be empty (whitespace does not count)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use naza_core::validation::validate_client_name;
///
/// assert!(validate_client_name("Adaobi O.").is_ok());
/// assert!(validate_client_name("   ").is_err());
/// ```
pub fn validate_client_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "Client name".to_string(),
        });
    }

    if name.chars().count() > MAX_CLIENT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "Client name".to_string(),
            max: MAX_CLIENT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates the invoice number.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
///
/// Hand-entered numbers are allowed any shape; the generated
/// `INV-yy-nnn` format is a convention, not a rule.
pub fn validate_invoice_no(invoice_no: &str) -> ValidationResult<()> {
    let invoice_no = invoice_no.trim();

    if invoice_no.is_empty() {
        return Err(ValidationError::Required {
            field: "Invoice number".to_string(),
        });
    }

    if invoice_no.chars().count() > MAX_INVOICE_NO_LEN {
        return Err(ValidationError::TooLong {
            field: "Invoice number".to_string(),
            max: MAX_INVOICE_NO_LEN,
        });
    }

    Ok(())
}

/// Validates the invoice date.
///
/// ## Rules
/// - Must be present (`Some`); the date itself is already well-formed
///   because the field is typed
pub fn validate_invoice_date(invoice_date: Option<NaiveDate>) -> ValidationResult<()> {
    if invoice_date.is_none() {
        return Err(ValidationError::Required {
            field: "Invoice date".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Form Validator
// =============================================================================

/// Validates everything a printable invoice needs, collecting every
/// failure.
///
/// ## User Workflow
/// ```text
/// Preview requested
///      │
///      ▼
/// validate_form ← THIS FUNCTION
///      │
///      ├── errors? → "Please fix the following errors:" + joined list
///      │
///      └── ok → totals are recomputed and the preview is rendered
/// ```
pub fn validate_form(form: &InvoiceForm) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(err) = validate_client_name(&form.client_name) {
        errors.push(err);
    }
    if let Err(err) = validate_invoice_no(&form.invoice_no) {
        errors.push(err);
    }
    if let Err(err) = validate_invoice_date(form.invoice_date) {
        errors.push(err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ServiceLine;
    use chrono::Utc;

    fn valid_form() -> InvoiceForm {
        InvoiceForm {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            invoice_no: "INV-26-412".to_string(),
            invoice_date: NaiveDate::from_ymd_opt(2026, 8, 7),
            due_date: NaiveDate::from_ymd_opt(2026, 8, 14),
            client_name: "Adaobi O.".to_string(),
            client_address: String::new(),
            client_email: String::new(),
            lines: vec![ServiceLine::new("Deep Cleaning", "₦1,500")],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_validate_client_name() {
        assert!(validate_client_name("Adaobi O.").is_ok());
        assert!(validate_client_name("").is_err());
        assert!(validate_client_name("   ").is_err());
        assert!(validate_client_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_invoice_no() {
        assert!(validate_invoice_no("INV-26-412").is_ok());
        assert!(validate_invoice_no("2026/044").is_ok());
        assert!(validate_invoice_no("").is_err());
        assert!(validate_invoice_no(&"9".repeat(60)).is_err());
    }

    #[test]
    fn test_validate_invoice_date() {
        assert!(validate_invoice_date(NaiveDate::from_ymd_opt(2026, 8, 7)).is_ok());
        assert!(validate_invoice_date(None).is_err());
    }

    #[test]
    fn test_validate_form_ok() {
        assert!(validate_form(&valid_form()).is_ok());
    }

    #[test]
    fn test_validate_form_collects_all_errors() {
        let mut form = valid_form();
        form.client_name = String::new();
        form.invoice_no = "  ".to_string();
        form.invoice_date = None;

        let errors = validate_form(&form).unwrap_err();
        assert_eq!(errors.len(), 3);
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        assert!(messages.contains(&"Client name is required".to_string()));
        assert!(messages.contains(&"Invoice number is required".to_string()));
        assert!(messages.contains(&"Invoice date is required".to_string()));
    }
}
