//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                     │
//! │                                                                 │
//! │  In floating point:                                             │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                   │
//! │                                                                 │
//! │  OUR SOLUTION: Integer Cents                                    │
//! │    A price of $45.50 is the integer 4550                        │
//! │    The store, the wire format, and all comparisons use cents    │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grocer_core::money::Money;
//!
//! // Create from cents (preferred)
//! let mrp = Money::from_cents(5000); // $50.00
//!
//! // Parse user input
//! let selling: Money = "45.50".parse().unwrap();
//! assert_eq!(selling.cents(), 4550);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Arithmetic can pass through negative intermediates;
///   validation rejects negative prices at the record boundary
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Transparent serde**: Serializes as a plain JSON number, so the stored
///   inventory document carries `"mrp": 5000` rather than a nested object
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use grocer_core::money::Money;
    ///
    /// let price = Money::from_cents(4500); // Represents $45.00
    /// assert_eq!(price.cents(), 4500);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use grocer_core::money::Money;
    ///
    /// let price = Money::from_major_minor(45, 50); // $45.50
    /// assert_eq!(price.cents(), 4550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
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
}

// =============================================================================
// Parsing
// =============================================================================

/// Error returned when a string cannot be parsed as a money amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid amount '{0}', expected a value like 45 or 45.50")]
pub struct ParseMoneyError(String);

/// Parses user-entered amounts: `45`, `45.5`, `45.50`, optionally with a
/// leading `$`. At most two fraction digits are accepted; the value is
/// exact, never rounded.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let raw = raw.strip_prefix('$').unwrap_or(raw);
        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };

        let (major_str, minor) = match digits.split_once('.') {
            Some((whole, frac)) => {
                if frac.is_empty()
                    || frac.len() > 2
                    || !frac.chars().all(|c| c.is_ascii_digit())
                {
                    return Err(ParseMoneyError(s.to_string()));
                }
                let mut cents: i64 = frac.parse().map_err(|_| ParseMoneyError(s.to_string()))?;
                if frac.len() == 1 {
                    // "45.5" means 45 dollars 50 cents
                    cents *= 10;
                }
                (whole, cents)
            }
            None => (digits, 0),
        };

        if major_str.is_empty() || !major_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseMoneyError(s.to_string()));
        }
        let major: i64 = major_str
            .parse()
            .map_err(|_| ParseMoneyError(s.to_string()))?;

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| ParseMoneyError(s.to_string()))?;

        Ok(Money::from_cents(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
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

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
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
        let money = Money::from_cents(4550);
        assert_eq!(money.cents(), 4550);
        assert_eq!(money.dollars(), 45);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(45, 50);
        assert_eq!(money.cents(), 4550);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(4550)), "$45.50");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_parse_whole_amount() {
        assert_eq!("45".parse::<Money>().unwrap().cents(), 4500);
        assert_eq!("0".parse::<Money>().unwrap().cents(), 0);
        assert_eq!("$50".parse::<Money>().unwrap().cents(), 5000);
    }

    #[test]
    fn test_parse_fractional_amount() {
        assert_eq!("45.50".parse::<Money>().unwrap().cents(), 4550);
        assert_eq!("45.5".parse::<Money>().unwrap().cents(), 4550);
        assert_eq!("45.05".parse::<Money>().unwrap().cents(), 4505);
        assert_eq!("-0.50".parse::<Money>().unwrap().cents(), -50);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!("$".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("45.".parse::<Money>().is_err());
        assert!("45.123".parse::<Money>().is_err());
        assert!("4 5".parse::<Money>().is_err());
    }

    #[test]
    fn test_parse_round_trips_display() {
        let money = Money::from_cents(4550);
        let parsed: Money = money.to_string().parse().unwrap();
        assert_eq!(parsed, money);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);
        c -= b;
        assert_eq!(c.cents(), 1000);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert_eq!(Money::default(), zero);

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&Money::from_cents(4550)).unwrap();
        assert_eq!(json, "4550");

        let back: Money = serde_json::from_str("4550").unwrap();
        assert_eq!(back.cents(), 4550);
    }
}
