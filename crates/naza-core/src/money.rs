//! # Money Module
//!
//! Provides the `Naira` type and the total parse/format pair used by the
//! invoice form.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Kobo                                             │
//! │    1 naira = 100 kobo, stored as i64                                    │
//! │    Every amount the form can display (2 fraction digits) is exact       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Round Trip
//! Amount fields hold display text, not numbers. Reading a field goes
//! through [`parse_amount`], writing one goes through [`format_amount`].
//! Formatting is stable under the round trip:
//! `format(parse(format(x))) == format(x)` for every value `x`.
//!
//! ## Usage
//! ```rust
//! use naza_core::money::{parse_amount, Naira};
//!
//! // Parsing is total: malformed text is zero, never an error
//! assert_eq!(parse_amount("₦1,234.50"), Naira::from_kobo(123_450));
//! assert_eq!(parse_amount("abc"), Naira::zero());
//!
//! // Display trims trailing fraction zeros, like the form does
//! assert_eq!(Naira::from_kobo(123_450).to_string(), "₦1,234.5");
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::NAIRA_SYMBOL;

// =============================================================================
// Naira Type
// =============================================================================

/// A monetary value in kobo, the smallest displayed currency unit
/// (1 naira = 100 kobo).
///
/// ## Design Decisions
/// - **i64 (signed)**: The aggregator never produces negatives from form
///   input, but the type still renders them deterministically
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support plus TypeScript bindings for the form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Naira(i64);

impl Naira {
    /// Creates a value from kobo (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use naza_core::money::Naira;
    ///
    /// let amount = Naira::from_kobo(150_000); // ₦1,500
    /// assert_eq!(amount.kobo(), 150_000);
    /// ```
    #[inline]
    pub const fn from_kobo(kobo: i64) -> Self {
        Naira(kobo)
    }

    /// Returns the value in kobo.
    #[inline]
    pub const fn kobo(&self) -> i64 {
        self.0
    }

    /// Returns the whole-naira portion.
    #[inline]
    pub const fn naira_part(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the kobo portion (always 0-99).
    #[inline]
    pub const fn kobo_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero naira.
    #[inline]
    pub const fn zero() -> Self {
        Naira(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Extracts the numeric value from an amount field's display text.
///
/// This is a TOTAL function: it always returns a value and never fails.
/// Callers rely on that contract to keep the form responsive without
/// error-handling branches.
///
/// ## Behavior
/// Every character that is not an ASCII digit or a decimal point is
/// stripped, and the remainder is read as a decimal number:
///
/// - `"₦1,234.50"` → `₦1,234.50` (symbol and grouping stripped)
/// - `""`, `"abc"`, `"1.2.3"`, `"."` → zero (nothing numeric remains)
/// - `".5"`, `"5."` → `₦0.50`, `₦5` (partial decimals read like numbers)
///
/// Fraction digits beyond the second round half-up into kobo, and values
/// beyond the i64 kobo range saturate. Both cases are far outside anything
/// the form produces; the rules just keep the function deterministic.
///
/// ## User Workflow
/// ```text
/// Field blur:  "1500"      ──► parse ──► format ──► "₦1,500"
/// Recalculate: "₦1,500"    ──► parse ──► 150000 kobo ──► sum
/// Garbage in:  "two naira" ──► parse ──► 0 (line simply doesn't count)
/// ```
pub fn parse_amount(text: &str) -> Naira {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut parts = cleaned.splitn(3, '.');
    let whole = parts.next().unwrap_or("");
    let fraction = parts.next();
    if parts.next().is_some() {
        // More than one decimal point: not a number.
        return Naira::zero();
    }
    if whole.is_empty() && fraction.map_or(true, str::is_empty) {
        return Naira::zero();
    }

    let mut kobo: i128 = 0;
    for digit in whole.bytes() {
        kobo = kobo
            .saturating_mul(10)
            .saturating_add((digit - b'0') as i128);
    }
    kobo = kobo.saturating_mul(100);

    if let Some(fraction) = fraction {
        let digits = fraction.as_bytes();
        if let Some(&d) = digits.first() {
            kobo = kobo.saturating_add(((d - b'0') as i128) * 10);
        }
        if let Some(&d) = digits.get(1) {
            kobo = kobo.saturating_add((d - b'0') as i128);
        }
        // Half-up rounding on the third fraction digit; kobo is the
        // finest unit the form displays.
        if let Some(&d) = digits.get(2) {
            if d >= b'5' {
                kobo = kobo.saturating_add(1);
            }
        }
    }

    Naira(kobo.min(i64::MAX as i128) as i64)
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats an optional amount for display, treating a missing value as zero.
///
/// Mirrors the form contract exactly: an empty or absent field renders as
/// `"₦0"` rather than raising.
///
/// ## Example
/// ```rust
/// use naza_core::money::{format_amount, Naira};
///
/// assert_eq!(format_amount(None), "₦0");
/// assert_eq!(format_amount(Some(Naira::from_kobo(123_455))), "₦1,234.55");
/// ```
pub fn format_amount(value: Option<Naira>) -> String {
    value.unwrap_or_default().to_string()
}

/// Display formatting: fixed `₦` prefix, comma digit grouping, at most two
/// fraction digits with trailing fraction zeros omitted.
///
/// `1000` → `"₦1,000"`, `1000.5` → `"₦1,000.5"`, `1000.55` → `"₦1,000.55"`.
///
/// Negative values render the sign after the symbol (`"₦-1,234.5"`),
/// matching a symbol prefix on a locale-formatted number.
impl fmt::Display for Naira {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Widen before abs so i64::MIN cannot overflow.
        let kobo = (self.0 as i128).abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        let whole = kobo / 100;
        let fraction = kobo % 100;

        write!(f, "{}{}{}", NAIRA_SYMBOL, sign, group_thousands(whole))?;
        if fraction != 0 {
            if fraction % 10 == 0 {
                write!(f, ".{}", fraction / 10)?;
            } else {
                write!(f, ".{:02}", fraction)?;
            }
        }
        Ok(())
    }
}

/// Inserts `,` between every group of three digits, from the right.
fn group_thousands(value: i128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.char_indices() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Addition of two Naira values.
///
/// Saturating: inputs are already clamped to the kobo range by
/// [`parse_amount`], so totals stay in range for any number of lines.
impl Add for Naira {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Naira(self.0.saturating_add(other.0))
    }
}

/// Addition assignment (+=).
impl AddAssign for Naira {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Summation over line amounts. Order-independent by construction.
impl Sum for Naira {
    fn sum<I: Iterator<Item = Naira>>(iter: I) -> Self {
        iter.fold(Naira::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kobo() {
        let amount = Naira::from_kobo(123_455);
        assert_eq!(amount.kobo(), 123_455);
        assert_eq!(amount.naira_part(), 1234);
        assert_eq!(amount.kobo_part(), 55);
    }

    #[test]
    fn test_parse_formatted_text() {
        assert_eq!(parse_amount("₦1,234.50"), Naira::from_kobo(123_450));
        assert_eq!(parse_amount("₦100"), Naira::from_kobo(10_000));
        assert_eq!(parse_amount("₦2,000.75"), Naira::from_kobo(200_075));
    }

    #[test]
    fn test_parse_raw_text() {
        assert_eq!(parse_amount("1500"), Naira::from_kobo(150_000));
        assert_eq!(parse_amount("  1500 naira "), Naira::from_kobo(150_000));
        assert_eq!(parse_amount(".5"), Naira::from_kobo(50));
        assert_eq!(parse_amount("5."), Naira::from_kobo(500));
    }

    #[test]
    fn test_parse_malformed_is_zero() {
        assert_eq!(parse_amount(""), Naira::zero());
        assert_eq!(parse_amount("abc"), Naira::zero());
        assert_eq!(parse_amount("₦"), Naira::zero());
        assert_eq!(parse_amount("."), Naira::zero());
        assert_eq!(parse_amount("1.2.3"), Naira::zero());
    }

    #[test]
    fn test_parse_rounds_extra_fraction_digits() {
        // Third fraction digit rounds half-up into kobo
        assert_eq!(parse_amount("1.005"), Naira::from_kobo(101));
        assert_eq!(parse_amount("1.0049"), Naira::from_kobo(100));
        assert_eq!(parse_amount("0.999"), Naira::from_kobo(100));
    }

    #[test]
    fn test_parse_saturates_on_huge_input() {
        let huge = "9".repeat(40);
        assert_eq!(parse_amount(&huge), Naira::from_kobo(i64::MAX));
    }

    #[test]
    fn test_display() {
        assert_eq!(Naira::zero().to_string(), "₦0");
        assert_eq!(Naira::from_kobo(100_000).to_string(), "₦1,000");
        assert_eq!(Naira::from_kobo(100_050).to_string(), "₦1,000.5");
        assert_eq!(Naira::from_kobo(100_055).to_string(), "₦1,000.55");
        assert_eq!(Naira::from_kobo(5).to_string(), "₦0.05");
        assert_eq!(Naira::from_kobo(123_456_789).to_string(), "₦1,234,567.89");
    }

    #[test]
    fn test_display_negative() {
        // Never produced by aggregation, but still deterministic
        assert_eq!(Naira::from_kobo(-123_450).to_string(), "₦-1,234.5");
        assert!(Naira::from_kobo(i64::MIN).to_string().starts_with("₦-"));
    }

    #[test]
    fn test_format_amount_missing_is_zero() {
        assert_eq!(format_amount(None), "₦0");
        assert_eq!(format_amount(Some(Naira::from_kobo(123_450))), "₦1,234.5");
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        for kobo in [0, 5, 50, 100, 123_450, 123_455, 100_000, 987_654_321] {
            let amount = Naira::from_kobo(kobo);
            let once = amount.to_string();
            let twice = parse_amount(&once).to_string();
            assert_eq!(once, twice, "round trip changed {kobo} kobo");
            assert_eq!(parse_amount(&once), amount);
        }
    }

    #[test]
    fn test_sum_and_add() {
        let total: Naira = [10_000, 25_050, 0]
            .into_iter()
            .map(Naira::from_kobo)
            .sum();
        assert_eq!(total, Naira::from_kobo(35_050));

        let mut running = Naira::zero();
        running += Naira::from_kobo(150);
        assert_eq!(running, Naira::from_kobo(150));
    }
}
