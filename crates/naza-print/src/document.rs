//! # Preview Document
//!
//! Assembles everything the printed invoice shows into one flat value:
//! letterhead, bill-to block, payment details, numbered service rows and
//! formatted totals. All money text is produced by the core formatter, so
//! the preview always matches what the form displays.

use serde::{Deserialize, Serialize};

use naza_core::money::format_amount;
use naza_core::{InvoiceForm, Naira};

// =============================================================================
// Business Profile
// =============================================================================

/// The letterhead and payment details printed on every invoice.
///
/// Injected into [`PreviewDocument::build`] rather than hardcoded in the
/// renderer, so the application layer decides whose identity goes on the
/// page. The default is the Naza Cleaning Service profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessProfile {
    /// Business name shown in the header.
    pub name: String,

    /// Short slogan printed under the name.
    pub tagline: String,

    /// Address lines for the letterhead.
    pub address_lines: Vec<String>,

    /// Bank shown in the payment information block.
    pub bank_name: String,

    /// Account holder name.
    pub account_name: String,

    /// Account number.
    pub account_number: String,

    /// Terms and conditions paragraph at the bottom of the invoice.
    pub terms: String,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        BusinessProfile {
            name: "Naza Cleaning Service".to_string(),
            tagline: "Professional Cleaning Solutions".to_string(),
            address_lines: vec![
                "Victoria Crest Estate".to_string(),
                "Lagos Island".to_string(),
                "Nigeria".to_string(),
            ],
            bank_name: "OPay".to_string(),
            account_name: "Naza Cleaning Service".to_string(),
            account_number: "9030000000".to_string(),
            terms: "Payment is due 30 days from the invoice date.".to_string(),
        }
    }
}

// =============================================================================
// Service Rows
// =============================================================================

/// One row of the printed services table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRow {
    /// Row number as it appears in the ITEM column.
    pub item_no: usize,

    /// Service description.
    pub description: String,

    /// Formatted rate column. The form bills flat amounts per service, so
    /// this mirrors the amount column.
    pub rate: String,

    /// Formatted amount column.
    pub amount: String,
}

// =============================================================================
// Preview Document
// =============================================================================

/// Everything the printed invoice shows, as display-ready strings.
///
/// A pure projection of a [`BusinessProfile`] and an [`InvoiceForm`];
/// rebuilding from the same inputs yields the same document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewDocument {
    /// Letterhead and payment details.
    pub business: BusinessProfile,

    /// Business invoice number.
    pub invoice_no: String,

    /// Invoice date display text; empty when the field is cleared.
    pub invoice_date: String,

    /// Due date display text; empty when the field is cleared.
    pub due_date: String,

    /// "BILL TO" block.
    pub client_name: String,
    pub client_address: String,
    pub client_email: String,

    /// Billable service rows. Zero-amount rows are left out.
    pub rows: Vec<ServiceRow>,

    /// Formatted subtotal.
    pub subtotal: String,

    /// Formatted sales-tax line. Always the fixed zero display; there is
    /// no tax computation in this system.
    pub sales_tax: String,

    /// Formatted grand total.
    pub grand_total: String,
}

impl PreviewDocument {
    /// Builds the preview from a form.
    ///
    /// Totals are recomputed here from the current line texts, never taken
    /// from a cached value, so the preview cannot drift from the form.
    ///
    /// ## Example
    /// ```rust
    /// use naza_core::{InvoiceForm, ServiceLine};
    /// use naza_print::{BusinessProfile, PreviewDocument};
    /// # use chrono::Utc;
    ///
    /// # let form = InvoiceForm {
    /// #     id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
    /// #     invoice_no: "INV-26-412".to_string(),
    /// #     invoice_date: None,
    /// #     due_date: None,
    /// #     client_name: "Adaobi O.".to_string(),
    /// #     client_address: String::new(),
    /// #     client_email: String::new(),
    /// #     lines: vec![ServiceLine::new("Deep Cleaning", "₦1,500")],
    /// #     created_at: Utc::now(),
    /// # };
    /// let doc = PreviewDocument::build(&BusinessProfile::default(), &form);
    /// assert_eq!(doc.subtotal, "₦1,500");
    /// assert_eq!(doc.sales_tax, "₦0");
    /// ```
    pub fn build(business: &BusinessProfile, form: &InvoiceForm) -> Self {
        let totals = form.totals();

        // Row numbers follow the form position, so a skipped zero row
        // leaves a gap instead of renumbering the rows after it.
        let rows = form
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_billable())
            .map(|(index, line)| {
                let amount = format_amount(Some(line.amount_value()));
                ServiceRow {
                    item_no: index + 1,
                    description: line.description.clone(),
                    rate: amount.clone(),
                    amount,
                }
            })
            .collect();

        PreviewDocument {
            business: business.clone(),
            invoice_no: form.invoice_no.clone(),
            invoice_date: form
                .invoice_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
            due_date: form.due_date.map(|d| d.to_string()).unwrap_or_default(),
            client_name: form.client_name.clone(),
            client_address: form.client_address.clone(),
            client_email: form.client_email.clone(),
            rows,
            subtotal: format_amount(Some(totals.subtotal)),
            sales_tax: format_amount(Some(Naira::zero())),
            grand_total: format_amount(Some(totals.grand_total)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use naza_core::ServiceLine;

    fn test_form(lines: Vec<ServiceLine>) -> InvoiceForm {
        InvoiceForm {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            invoice_no: "INV-26-412".to_string(),
            invoice_date: NaiveDate::from_ymd_opt(2026, 8, 7),
            due_date: NaiveDate::from_ymd_opt(2026, 8, 14),
            client_name: "Adaobi O.".to_string(),
            client_address: "12 Marina Road, Lagos".to_string(),
            client_email: "adaobi@example.com".to_string(),
            lines,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_build_skips_zero_rows_and_keeps_numbering() {
        let form = test_form(vec![
            ServiceLine::new("Deep Cleaning", "₦1,500"),
            ServiceLine::new("Office Cleaning", "₦0"),
            ServiceLine::new("Window Cleaning", "₦2,000.75"),
        ]);

        let doc = PreviewDocument::build(&BusinessProfile::default(), &form);

        assert_eq!(doc.rows.len(), 2);
        assert_eq!(doc.rows[0].item_no, 1);
        assert_eq!(doc.rows[0].description, "Deep Cleaning");
        // The zero row in position 2 leaves a gap
        assert_eq!(doc.rows[1].item_no, 3);
        assert_eq!(doc.rows[1].amount, "₦2,000.75");
    }

    #[test]
    fn test_build_rate_mirrors_amount() {
        let form = test_form(vec![ServiceLine::new("Deep Cleaning", "1500")]);
        let doc = PreviewDocument::build(&BusinessProfile::default(), &form);
        assert_eq!(doc.rows[0].rate, doc.rows[0].amount);
        assert_eq!(doc.rows[0].amount, "₦1,500");
    }

    #[test]
    fn test_build_totals_and_fixed_tax_line() {
        let form = test_form(vec![
            ServiceLine::new("Deep Cleaning", "₦0"),
            ServiceLine::new("Office Cleaning", "₦1,500"),
            ServiceLine::new("Window Cleaning", "₦2,000.75"),
        ]);

        let doc = PreviewDocument::build(&BusinessProfile::default(), &form);

        assert_eq!(doc.subtotal, "₦3,500.75");
        assert_eq!(doc.sales_tax, "₦0");
        assert_eq!(doc.grand_total, "₦3,500.75");
    }

    #[test]
    fn test_build_date_displays() {
        let mut form = test_form(Vec::new());
        form.due_date = None;

        let doc = PreviewDocument::build(&BusinessProfile::default(), &form);

        assert_eq!(doc.invoice_date, "2026-08-07");
        assert_eq!(doc.due_date, "");
    }
}
