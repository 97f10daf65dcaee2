//! # naza-print: Print Preview for Naza Invoice
//!
//! Builds the printable invoice from a form, in two pure steps:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  InvoiceForm ──► PreviewDocument ──► HTML string                        │
//! │   (naza-core)     [`document`]        [`html`]                          │
//! │                                                                         │
//! │  The document step decides WHAT is printed (rows, totals, letterhead);  │
//! │  the html step decides HOW it looks. Neither performs I/O; writing      │
//! │  the file is the application's job.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`document`] - [`PreviewDocument`] assembly and the [`BusinessProfile`]
//! - [`html`] - rendering a document as a standalone HTML page

pub mod document;
pub mod html;

pub use document::{BusinessProfile, PreviewDocument, ServiceRow};
pub use html::render_html;
