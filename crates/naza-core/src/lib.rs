//! # naza-core: Pure Business Logic for Naza Invoice
//!
//! This crate is the **heart** of Naza Invoice. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Naza Invoice Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Form Frontend (TypeScript)                      │   │
//! │  │    Client Details ──► Service Lines ──► Totals ──► Preview     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   Application Layer (apps/cli)                  │   │
//! │  │    form files, clock, invoice numbers, logging                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ naza-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   money   │  │   types   │  │ validation│                  │   │
//! │  │   │   Naira   │  │   Form    │  │   rules   │                  │   │
//! │  │   │ parse/fmt │  │   Totals  │  │  checks   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - The `Naira` type with total parsing and display formatting
//! - [`types`] - Domain types (ServiceLine, InvoiceForm, InvoiceTotals)
//! - [`validation`] - Required-field validation for the form
//! - [`error`] - Validation error type
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File system, network, clock and entropy access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in kobo (i64) to avoid float errors
//! 4. **Total Numeric Core**: Amount parsing and formatting never fail; malformed
//!    text deterministically becomes zero. Only form validation returns errors.
//!
//! ## Example Usage
//!
//! ```rust
//! use naza_core::money::format_amount;
//! use naza_core::InvoiceTotals;
//!
//! // Unparseable entries contribute zero, never an error
//! let totals = InvoiceTotals::aggregate(["₦100", "₦250.50", "abc"]);
//! assert_eq!(format_amount(Some(totals.subtotal)), "₦350.5");
//! assert_eq!(totals.grand_total, totals.subtotal);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use naza_core::Naira` instead of
// `use naza_core::money::Naira`

pub use error::ValidationError;
pub use money::Naira;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The fixed currency symbol prepended to every formatted amount.
///
/// ## Why a constant?
/// The business bills in Nigerian Naira only. Multi-currency support would
/// replace this with per-invoice currency data.
pub const NAIRA_SYMBOL: &str = "₦";

/// Days between the invoice date and the default due date.
///
/// ## Business Reason
/// New invoices give the client one week to pay unless the due date is
/// edited by hand.
pub const DUE_DATE_OFFSET_DAYS: i64 = 7;

/// Maximum length of the client name field.
///
/// ## Business Reason
/// Keeps the printed "BILL TO" block on one page. Long legal names fit
/// comfortably under this limit.
pub const MAX_CLIENT_NAME_LEN: usize = 200;

/// Maximum length of the invoice number field.
///
/// ## Business Reason
/// Generated numbers are 10 characters; hand-entered numbers get headroom
/// without letting the header overflow.
pub const MAX_INVOICE_NO_LEN: usize = 50;
