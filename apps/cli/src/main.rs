//! # Naza Invoice CLI
//!
//! Command-line front end for the invoice form. This binary is the form's
//! collaborator: it supplies the line texts to the core, receives the
//! formatted totals back, and owns every side effect (files, clock,
//! logging).
//!
//! ## Usage
//! ```bash
//! # Start a fresh form (also how you reset one)
//! naza new --out invoice.json
//!
//! # Recalculate and display the totals
//! naza totals --form invoice.json
//!
//! # Validate, normalize the amount fields and write the print preview
//! naza preview --form invoice.json --out preview.html
//! ```
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  new      ──► generate defaults ──────────────────────► invoice.json   │
//! │                                                                         │
//! │  totals   ──► load ──► aggregate line texts ──► print formatted totals │
//! │                                                                         │
//! │  preview  ──► load ──► validate (all errors at once)                    │
//! │                   ──► normalize amount fields ──► invoice.json          │
//! │                   ──► build document ──► render ──► preview.html       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod error;
mod form;

use std::path::PathBuf;

use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use naza_core::money::format_amount;
use naza_core::validation::validate_form;
use naza_print::{render_html, BusinessProfile, PreviewDocument};

use crate::error::{AppError, AppResult};

fn main() {
    init_tracing();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("new") => run_new(&args[2..]),
        Some("totals") => run_totals(&args[2..]),
        Some("preview") => run_preview(&args[2..]),
        Some("--help") | Some("-h") | None => {
            print_help();
            Ok(())
        }
        Some(other) => Err(AppError::Usage(format!("unknown command '{other}'"))),
    }
}

/// Creates a fresh form document with generated invoice number and dates.
fn run_new(args: &[String]) -> AppResult<()> {
    let out = flag_value(args, &["--out", "-o"]).unwrap_or_else(|| PathBuf::from("invoice.json"));

    let fresh = form::new_form(Utc::now());
    form::save_form(&out, &fresh)?;

    info!(invoice_no = %fresh.invoice_no, path = %out.display(), "New form created");

    println!("🧾 Naza Invoice");
    println!("{}", fresh.invoice_no_display());
    println!("{}", fresh.invoice_date_display());
    println!();
    println!("✓ New form written to {}", out.display());
    println!("  Fill in the client details and amounts, then run:");
    println!("  naza preview --form {}", out.display());

    Ok(())
}

/// Recalculates and prints the invoice totals from the current line texts.
fn run_totals(args: &[String]) -> AppResult<()> {
    let path = flag_value(args, &["--form", "-f"]).unwrap_or_else(|| PathBuf::from("invoice.json"));

    let invoice = form::load_form(&path)?;
    let totals = invoice.totals();

    info!(subtotal = totals.subtotal.kobo(), "Totals recalculated");

    println!("{}", invoice.invoice_no_display());
    for line in &invoice.lines {
        println!(
            "  {:<32} {:>14}",
            line.description,
            format_amount(Some(line.amount_value()))
        );
    }
    println!("  {:<32} {:>14}", "Sub Total", format_amount(Some(totals.subtotal)));
    println!("  {:<32} {:>14}", "TOTAL", format_amount(Some(totals.grand_total)));

    Ok(())
}

/// Validates the form, normalizes its amount fields and writes the print
/// preview.
fn run_preview(args: &[String]) -> AppResult<()> {
    let path = flag_value(args, &["--form", "-f"]).unwrap_or_else(|| PathBuf::from("invoice.json"));
    let out = flag_value(args, &["--out", "-o"]).unwrap_or_else(|| PathBuf::from("preview.html"));

    let mut invoice = form::load_form(&path)?;

    validate_form(&invoice).map_err(AppError::Validation)?;

    // Same normalization the form applies on field blur, persisted so the
    // document and the preview show identical text.
    invoice.normalize_amounts();
    form::save_form(&path, &invoice)?;

    let document = PreviewDocument::build(&BusinessProfile::default(), &invoice);
    let page = render_html(&document);
    std::fs::write(&out, page)?;

    info!(
        invoice_no = %invoice.invoice_no,
        rows = document.rows.len(),
        path = %out.display(),
        "Preview rendered"
    );

    println!("✓ Preview written to {}", out.display());
    println!("  Sub Total: {}", document.subtotal);
    println!("  Sales Tax: {}", document.sales_tax);
    println!("  TOTAL:     {}", document.grand_total);

    Ok(())
}

/// Returns the value following the first matching flag, if any.
fn flag_value(args: &[String], names: &[&str]) -> Option<PathBuf> {
    let mut i = 0;
    while i < args.len() {
        if names.contains(&args[i].as_str()) {
            if let Some(value) = args.get(i + 1) {
                return Some(PathBuf::from(value));
            }
        }
        i += 1;
    }
    None
}

fn print_help() {
    println!("Naza Invoice");
    println!();
    println!("Usage: naza <COMMAND> [OPTIONS]");
    println!();
    println!("Commands:");
    println!("  new       Create a fresh form document (also resets one)");
    println!("  totals    Recalculate and display the invoice totals");
    println!("  preview   Validate the form and write the print preview");
    println!();
    println!("Options:");
    println!("  -f, --form <PATH>   Form document path (default: invoice.json)");
    println!("  -o, --out <PATH>    Output path (new: invoice.json, preview: preview.html)");
    println!("  -h, --help          Show this help message");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO level, debug for the naza crates
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,naza=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_flag_value_long_and_short() {
        let long = args(&["--form", "a.json"]);
        assert_eq!(
            flag_value(&long, &["--form", "-f"]),
            Some(PathBuf::from("a.json"))
        );

        let short = args(&["-f", "b.json"]);
        assert_eq!(
            flag_value(&short, &["--form", "-f"]),
            Some(PathBuf::from("b.json"))
        );
    }

    #[test]
    fn test_flag_value_missing() {
        let none = args(&["--out"]);
        assert_eq!(flag_value(&none, &["--form", "-f"]), None);
        // Flag present but no value after it
        assert_eq!(flag_value(&none, &["--out", "-o"]), None);
    }
}
