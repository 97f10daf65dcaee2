//! # Form Documents
//!
//! Fresh-form generation and form file I/O. Everything impure about a form
//! lives here: the clock read for dates, the entropy for the invoice
//! number, and the JSON file on disk. The form itself stays plain data
//! from `naza-core`.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use naza_core::{default_due_date, InvoiceForm, Naira, ServiceLine};

use crate::error::AppResult;

/// Preset service lines for a fresh form.
///
/// The form starts with the services the business quotes most often, each
/// at `₦0`; untouched rows stay off the printed invoice.
const DEFAULT_SERVICES: &[&str] = &[
    "Deep Cleaning",
    "Regular House Cleaning",
    "Office Cleaning",
    "Post-Construction Cleaning",
    "Move-In / Move-Out Cleaning",
    "Window Cleaning",
];

/// Creates a fresh invoice form with generated details.
///
/// ## Generated Values
/// - `id`: UUID v4
/// - `invoice_no`: `INV-<yy>-<nnn>`, see [`generate_invoice_no`]
/// - `invoice_date`: today, `due_date`: one week out
/// - one `₦0` line per preset service
///
/// "Reset form" is this same operation: a reset discards the document and
/// re-emits defaults.
pub fn new_form(now: DateTime<Utc>) -> InvoiceForm {
    let invoice_date = now.date_naive();

    InvoiceForm {
        id: Uuid::new_v4().to_string(),
        invoice_no: generate_invoice_no(now),
        invoice_date: Some(invoice_date),
        due_date: Some(default_due_date(invoice_date)),
        client_name: String::new(),
        client_address: String::new(),
        client_email: String::new(),
        lines: DEFAULT_SERVICES
            .iter()
            .map(|service| ServiceLine::new(*service, Naira::zero().to_string()))
            .collect(),
        created_at: now,
    }
}

/// Generates a business invoice number like `INV-26-412`.
///
/// The two digits are the year; the three-digit serial (100-999) comes
/// from subsecond nanos at generation time.
fn generate_invoice_no(now: DateTime<Utc>) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    let serial = 100 + (nanos % 900);
    format!("INV-{}-{:03}", now.format("%y"), serial)
}

/// Loads a form document from disk.
pub fn load_form(path: &Path) -> AppResult<InvoiceForm> {
    let text = fs::read_to_string(path)?;
    let form: InvoiceForm = serde_json::from_str(&text)?;
    debug!(path = %path.display(), lines = form.lines.len(), "Form loaded");
    Ok(form)
}

/// Saves a form document to disk as pretty-printed JSON.
pub fn save_form(path: &Path, form: &InvoiceForm) -> AppResult<()> {
    let text = serde_json::to_string_pretty(form)?;
    fs::write(path, text)?;
    debug!(path = %path.display(), "Form saved");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_defaults() {
        let now = Utc::now();
        let form = new_form(now);

        assert_eq!(form.lines.len(), DEFAULT_SERVICES.len());
        assert!(form.lines.iter().all(|line| line.amount == "₦0"));
        assert!(form.client_name.is_empty());
        assert_eq!(form.invoice_date, Some(now.date_naive()));
        assert_eq!(
            form.due_date,
            Some(now.date_naive() + chrono::Duration::days(7))
        );
        assert!(form.totals().subtotal.is_zero());
    }

    #[test]
    fn test_generate_invoice_no_shape() {
        let invoice_no = generate_invoice_no(Utc::now());
        let parts: Vec<&str> = invoice_no.split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "INV");
        assert_eq!(parts[1].len(), 2);
        assert_eq!(parts[2].len(), 3);
        let serial: u32 = parts[2].parse().unwrap();
        assert!((100..=999).contains(&serial));
    }

    #[test]
    fn test_form_document_round_trips_through_json() {
        let form = new_form(Utc::now());
        let text = serde_json::to_string_pretty(&form).unwrap();
        let reloaded: InvoiceForm = serde_json::from_str(&text).unwrap();

        assert_eq!(reloaded.id, form.id);
        assert_eq!(reloaded.invoice_no, form.invoice_no);
        assert_eq!(reloaded.lines, form.lines);
        assert_eq!(reloaded.invoice_date, form.invoice_date);
    }
}
