//! # Money Module
//!
//! Provides the `Money` type for shipping costs and order totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Shipping 25.00 is stored as 2500 cents                               │
//! │    Totals are exact sums of cents, never rounded                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Overflow
//! Arithmetic saturates at the i64 bounds instead of panicking. Amounts
//! inside `validate_order_amount`'s range never get near them, so results
//! there are exact.
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! let shipping = Money::from_major(25);
//! let base = Money::from_major(200);
//!
//! assert_eq!((base + shipping).cents(), 22_500);
//! assert_eq!((base + shipping).to_string(), "225.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: discount amounts are subtracted, so intermediate
///   values may go negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **No currency**: every amount in a checkout shares one currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let cost = Money::from_cents(2050); // 20.50
    /// assert_eq!(cost.cents(), 2050);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// Order amounts are entered in whole units, so this is the usual
    /// entry point for base amounts.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(200).cents(), 20_000);
    /// assert_eq!(Money::from_major(i64::MAX).cents(), i64::MAX);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money::from_cents(major.saturating_mul(100))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor-unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal rendering with two fraction digits.
///
/// No currency symbol: the presentation layer decides how amounts are
/// labelled.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
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
        let money = Money::from_cents(2050);
        assert_eq!(money.cents(), 2050);
        assert_eq!(money.major(), 20);
        assert_eq!(money.minor(), 50);
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(25).cents(), 2500);
        assert_eq!(Money::from_major(0).cents(), 0);
        assert_eq!(Money::from_major(-3).cents(), -300);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major(180).to_string(), "180.00");
        assert_eq!(Money::from_cents(2005).to_string(), "20.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
    }

    #[test]
    fn test_add_and_sub() {
        let base = Money::from_major(200);
        let discount = Money::from_major(40);
        let shipping = Money::from_major(20);

        assert_eq!(base - discount + shipping, Money::from_major(180));
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        assert_eq!(Money::from_major(i64::MAX).cents(), i64::MAX);
        assert_eq!(Money::from_major(i64::MIN).cents(), i64::MIN);
        assert_eq!(
            (Money::from_cents(i64::MAX) + Money::from_cents(1)).cents(),
            i64::MAX
        );
        assert_eq!(
            (Money::from_cents(i64::MIN) - Money::from_cents(1)).cents(),
            i64::MIN
        );
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_major(25)).unwrap();
        assert_eq!(json, "2500");
    }
}
