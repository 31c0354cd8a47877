//! # Money Module
//!
//! Provides the `Money` type for handling euro amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Inserting coins as floats:                                             │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    2.0 - 1.8 = 0.19999999999999996  → "€0.20" only after rounding      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10 + 20 = 30 cents                                                   │
//! │    200 - 180 = 20 cents, exactly                                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vend_core::money::Money;
//!
//! let price = Money::from_cents(180); // €1.80
//! let paid = Money::from_cents(200);  // €2.00
//! assert_eq!((paid - price).cents(), 20);
//!
//! // Operator input is parsed exactly, never through a float
//! let parsed: Money = "2,50".parse().unwrap();
//! assert_eq!(parsed.cents(), 250);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in euro cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: operator input like `-1.00` parses, and validation
///   rejects it with a proper message instead of a parse failure
/// - **Single field tuple struct**: zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// Drink.price ──► PaymentSession.price
///                        │
/// Coin.value() ──► PaymentSession.inserted ──► change_due() ──► "€0.20"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::money::Money;
    ///
    /// let price = Money::from_cents(250); // €2.50
    /// assert_eq!(price.cents(), 250);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from euros and cents.
    ///
    /// For negative amounts only `euros` should be negative:
    /// `from_euros_cents(-5, 50)` is -€5.50.
    #[inline]
    pub const fn from_euros_cents(euros: i64, cents: i64) -> Self {
        if euros < 0 {
            Money(euros * 100 - cents)
        } else {
            Money(euros * 100 + cents)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-euro portion.
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cent portion (always 0-99).
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Checks whether this amount is a whole multiple of `step`.
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::money::Money;
    ///
    /// let step = Money::from_cents(10);
    /// assert!(Money::from_cents(250).is_multiple_of(step));
    /// assert!(!Money::from_cents(105).is_multiple_of(step));
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step: Money) -> bool {
        step.0 != 0 && self.0 % step.0 == 0
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses operator input such as `2.50`, `2,50`, `3` or `.5`.
///
/// ## Rules
/// - Either `.` or `,` separates euros from cents
/// - At most two significant decimals (`1.500` is fine, `1.005` is not)
/// - An optional leading sign is accepted; range checks belong to
///   [`crate::validation`]
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = || ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: format!("'{}' is not an amount like 2.50", input),
        };

        let (negative, unsigned) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input.strip_prefix('+').unwrap_or(input)),
        };

        let (whole, fraction) = unsigned
            .split_once(|c| c == '.' || c == ',')
            .unwrap_or((unsigned, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let (cent_digits, rest) = fraction.split_at(fraction.len().min(2));
        if rest.chars().any(|c| c != '0') {
            return Err(ValidationError::InvalidFormat {
                field: "amount".to_string(),
                reason: "at most two decimals are allowed".to_string(),
            });
        }

        let euros: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let cents: i64 = match cent_digits.len() {
            0 => 0,
            1 => cent_digits.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => cent_digits.parse().map_err(|_| invalid())?,
        };

        let total = euros
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Money(if negative { -total } else { total }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way the machine's display does: `€2.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}€{}.{:02}", sign, self.euros().abs(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
