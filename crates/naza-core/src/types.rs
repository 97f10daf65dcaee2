//! # Domain Types
//!
//! Core domain types for the invoice form.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  InvoiceForm    │   │  ServiceLine    │   │  InvoiceTotals  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │──►│  description    │──►│  subtotal       │       │
//! │  │  invoice_no     │   │  amount (text)  │   │  grand_total    │       │
//! │  │  dates, client  │   └─────────────────┘   └─────────────────┘       │
//! │  │  lines          │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! The form has:
//! - `id`: UUID v4 - immutable, used by the application layer
//! - `invoice_no`: human-readable business number printed on the invoice
//!
//! ## Amounts Are Display Text
//! A [`ServiceLine`] stores its amount as the raw field text, because that
//! is what the form holds between edits. All numeric reads go through the
//! total [`parse_amount`] function, so a line with garbage in it counts as
//! zero instead of breaking the totals.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{parse_amount, Naira};
use crate::DUE_DATE_OFFSET_DAYS;

// =============================================================================
// Service Line
// =============================================================================

/// One row of the invoice: a billed service and its amount field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ServiceLine {
    /// Display name of the billed service.
    pub description: String,

    /// Raw amount text as currently shown in the field. May be previously
    /// formatted currency text or anything the user typed.
    pub amount: String,
}

impl ServiceLine {
    /// Creates a line from a description and raw amount text.
    pub fn new(description: impl Into<String>, amount: impl Into<String>) -> Self {
        ServiceLine {
            description: description.into(),
            amount: amount.into(),
        }
    }

    /// Reads the numeric value of the amount field. Total, never fails.
    #[inline]
    pub fn amount_value(&self) -> Naira {
        parse_amount(&self.amount)
    }

    /// Rewrites the amount field as canonical currency text, the same
    /// normalization the form applies when a field loses focus:
    /// `format(parse(text))`.
    ///
    /// ## Example
    /// ```rust
    /// use naza_core::ServiceLine;
    ///
    /// let mut line = ServiceLine::new("Deep Cleaning", "1500");
    /// line.normalize();
    /// assert_eq!(line.amount, "₦1,500");
    /// ```
    pub fn normalize(&mut self) {
        self.amount = self.amount_value().to_string();
    }

    /// Whether the line carries a non-zero amount. Zero-amount rows are
    /// left off the printed invoice.
    #[inline]
    pub fn is_billable(&self) -> bool {
        !self.amount_value().is_zero()
    }
}

// =============================================================================
// Invoice Form
// =============================================================================

/// The invoice form as the user sees it: client details, numbering, dates
/// and service lines.
///
/// The form is plain data. It never touches the file system or the clock;
/// the application layer owns loading, saving and default generation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceForm {
    /// Unique identifier (UUID v4), assigned when the form is created.
    pub id: String,

    /// Business invoice number shown on the printed invoice,
    /// e.g. `INV-26-412`.
    pub invoice_no: String,

    /// Invoice date. `None` when the field has been cleared.
    #[ts(as = "Option<String>")]
    pub invoice_date: Option<NaiveDate>,

    /// Payment due date. Defaults to one week after the invoice date.
    #[ts(as = "Option<String>")]
    pub due_date: Option<NaiveDate>,

    /// Client name ("BILL TO" block). Required before printing.
    pub client_name: String,

    /// Client postal address. Optional.
    pub client_address: String,

    /// Client email address. Optional.
    pub client_email: String,

    /// Service lines, one per invoice row.
    pub lines: Vec<ServiceLine>,

    /// When the form was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl InvoiceForm {
    /// Recomputes the invoice totals from the current line texts.
    ///
    /// Pure projection: nothing is cached, calling this twice on the same
    /// form yields the same totals.
    pub fn totals(&self) -> InvoiceTotals {
        InvoiceTotals::aggregate(self.lines.iter().map(|line| line.amount.as_str()))
    }

    /// Normalizes every amount field to canonical currency text.
    pub fn normalize_amounts(&mut self) {
        for line in &mut self.lines {
            line.normalize();
        }
    }

    /// Header line shown above the form, e.g. `Invoice Number: INV-26-412`.
    pub fn invoice_no_display(&self) -> String {
        format!("Invoice Number: {}", self.invoice_no)
    }

    /// Header line for the invoice date, e.g. `Date: 2026-08-07`.
    /// A cleared date renders as `Date: ` so the header stays stable.
    pub fn invoice_date_display(&self) -> String {
        format!(
            "Date: {}",
            self.invoice_date.map(|d| d.to_string()).unwrap_or_default()
        )
    }
}

/// The default due date for an invoice issued on `invoice_date`.
pub fn default_due_date(invoice_date: NaiveDate) -> NaiveDate {
    invoice_date + Duration::days(DUE_DATE_OFFSET_DAYS)
}

// =============================================================================
// Invoice Totals
// =============================================================================

/// Aggregated invoice amounts: subtotal and grand total.
///
/// In this system the grand total equals the subtotal. The printed invoice
/// shows a sales-tax line as a fixed zero with no computation behind it;
/// tax and discount policies are future extension points, not modeled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvoiceTotals {
    pub subtotal: Naira,
    pub grand_total: Naira,
}

impl InvoiceTotals {
    /// Sums a sequence of amount field texts.
    ///
    /// Each text is read with the total parser, so unparseable entries
    /// contribute zero and the aggregation itself can never fail. The sum
    /// is associative and commutative: iteration order does not matter.
    ///
    /// ## Example
    /// ```rust
    /// use naza_core::{InvoiceTotals, Naira};
    ///
    /// let totals = InvoiceTotals::aggregate(["₦100", "₦250.50", "abc"]);
    /// assert_eq!(totals.subtotal, Naira::from_kobo(35_050));
    /// assert_eq!(totals.grand_total, totals.subtotal);
    /// ```
    pub fn aggregate<I>(line_texts: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let subtotal: Naira = line_texts
            .into_iter()
            .map(|text| parse_amount(text.as_ref()))
            .sum();

        InvoiceTotals {
            subtotal,
            grand_total: subtotal,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
