//! # Money Module
//!
//! Provides the `Money` type for item costs and every cost-per-wear figure.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing costs as floats drifts:                                        │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Totals are exact sums of cents.                                      │
//! │    Only the per-wear divisions round, once, to the nearest cent.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use wardrobe_core::money::Money;
//!
//! let jacket = Money::from_cents(30_000); // $300.00
//! let per_wear = jacket.divide_by_count(25);
//! assert_eq!(per_wear.cents(), 1_200); // $12.00
//!
//! // Form input is parsed from text, never from floats
//! assert_eq!(Money::parse_decimal("19.99"), Some(Money::from_cents(1_999)));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: item costs are never negative, but the form parser
///   has to represent a negative input before rejecting it
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use wardrobe_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal amount typed into the cost field.
    ///
    /// ## Accepted Input
    /// ```text
    /// "12"     → 1200     "12.5"  → 1250     ".5"  → 50
    /// "12.34"  → 1234     "+3"    → 300      "-2"  → -200
    /// "12.345" → 1235  (third fraction digit rounds half-up)
    /// ""  "."  "abc"  "1e3"  "1.2.3"  → None
    /// ```
    ///
    /// Surrounding whitespace is ignored. Negative values parse so the
    /// caller can report them as out of range rather than malformed.
    pub fn parse_decimal(input: &str) -> Option<Money> {
        let s = input.trim();
        let (negative, digits) = match s.as_bytes().first()? {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole.parse::<i64>().ok()?.checked_mul(100)?
        };

        let mut frac_digits = frac.bytes().map(|b| i64::from(b - b'0'));
        let tens = frac_digits.next().unwrap_or(0);
        let ones = frac_digits.next().unwrap_or(0);
        let round_up = frac_digits.next().is_some_and(|d| d >= 5);

        let cents = whole_cents
            .checked_add(tens * 10 + ones)?
            .checked_add(i64::from(round_up))?;

        Some(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Splits this amount evenly over `count` uses, rounded to the nearest
    /// cent (halves round away from zero).
    ///
    /// A count of zero yields zero rather than dividing by zero. This is the
    /// rule for both per-item cost per wear and the dashboard average.
    ///
    /// ## Example
    /// ```rust
    /// use wardrobe_core::money::Money;
    ///
    /// // $500.00 over 115 wears = $4.3478... → $4.35
    /// assert_eq!(Money::from_cents(50_000).divide_by_count(115).cents(), 435);
    ///
    /// // Never worn
    /// assert_eq!(Money::from_cents(8_000).divide_by_count(0), Money::zero());
    /// ```
    pub fn divide_by_count(&self, count: u64) -> Money {
        if count == 0 {
            return Money::zero();
        }

        // i128 keeps the doubled numerator from overflowing
        let count = i128::from(count);
        let cents = i128::from(self.0);
        let rounded = (cents.abs() * 2 + count) / (count * 2);
        let signed = if cents < 0 { -rounded } else { rounded };
        Money(signed as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Dollar formatting for logs and tests. The frontend formats with the
/// configured currency symbol instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Saturates at the i64 bounds instead of overflowing.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_parse_decimal_accepts_form_input() {
        assert_eq!(Money::parse_decimal("12"), Some(Money::from_cents(1200)));
        assert_eq!(Money::parse_decimal("12.5"), Some(Money::from_cents(1250)));
        assert_eq!(Money::parse_decimal("12.34"), Some(Money::from_cents(1234)));
        assert_eq!(Money::parse_decimal(".5"), Some(Money::from_cents(50)));
        assert_eq!(Money::parse_decimal("12."), Some(Money::from_cents(1200)));
        assert_eq!(Money::parse_decimal(" 80 "), Some(Money::from_cents(8000)));
        assert_eq!(Money::parse_decimal("+3"), Some(Money::from_cents(300)));
        assert_eq!(Money::parse_decimal("-2.5"), Some(Money::from_cents(-250)));
        assert_eq!(Money::parse_decimal("0"), Some(Money::zero()));
    }

    #[test]
    fn test_parse_decimal_rounds_third_fraction_digit() {
        assert_eq!(Money::parse_decimal("12.345"), Some(Money::from_cents(1235)));
        assert_eq!(Money::parse_decimal("12.344"), Some(Money::from_cents(1234)));
        assert_eq!(Money::parse_decimal("0.999"), Some(Money::from_cents(100)));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        for input in ["", "   ", ".", "-", "abc", "1e3", "1.2.3", "12a", "$5", "1,000"] {
            assert_eq!(Money::parse_decimal(input), None, "input {:?}", input);
        }
        assert_eq!(Money::parse_decimal("99999999999999999999"), None);
    }

    #[test]
    fn test_divide_by_count() {
        assert_eq!(Money::from_cents(30_000).divide_by_count(25).cents(), 1200);
        assert_eq!(Money::from_cents(12_000).divide_by_count(50).cents(), 240);
        assert_eq!(Money::from_cents(50_000).divide_by_count(115).cents(), 435);
        // $10.00 / 3 = 333.33 cents → 333
        assert_eq!(Money::from_cents(1000).divide_by_count(3).cents(), 333);
        // $0.05 / 2 = 2.5 cents → 3
        assert_eq!(Money::from_cents(5).divide_by_count(2).cents(), 3);
        assert_eq!(Money::from_cents(-5).divide_by_count(2).cents(), -3);
    }

    #[test]
    fn test_divide_by_zero_count_is_zero() {
        assert_eq!(Money::from_cents(8_000).divide_by_count(0), Money::zero());
    }

    #[test]
    fn test_sum() {
        let costs = [
            Money::from_cents(30_000),
            Money::from_cents(12_000),
            Money::from_cents(8_000),
        ];
        let total: Money = costs.into_iter().sum();
        assert_eq!(total.cents(), 50_000);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_add() {
        let a = Money::from_cents(1000) + Money::from_cents(500);
        assert_eq!(a.cents(), 1500);
        assert!(!a.is_negative());
    }

    #[test]
    fn test_sum_saturates_instead_of_overflowing() {
        let huge = Money::from_cents(i64::MAX - 1);
        let total: Money = [huge, huge, Money::from_cents(1)].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }
}
