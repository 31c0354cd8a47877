//! # Validation Module
//!
//! Rules for what an operator may type into the maintenance menu.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console (apps/console)                                       │
//! │  └── Reads a line, hands the raw text over                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── parse_price / parse_quantity (text → value)                       │
//! │  └── validate_price / validate_quantity / validate_brand               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Drink                                                        │
//! │  └── Stock bounds on every mutation                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vend_core::validation::{parse_price, validate_quantity};
//!
//! assert_eq!(parse_price("1.80").unwrap().cents(), 180);
//! assert!(parse_price("1.05").is_err());
//! assert!(validate_quantity(11).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_STOCK, PRICE_STEP};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a drink brand.
///
/// ## Rules
/// - Must not be empty or whitespace only
pub fn validate_brand(brand: &str) -> ValidationResult<()> {
    if brand.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "brand".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a drink price.
///
/// ## Rules
/// - Must be non-negative (zero is a free drink)
/// - Must be a whole multiple of €0.10
///
/// ## Example
/// ```rust
/// use vend_core::money::Money;
/// use vend_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(250)).is_ok());
/// assert!(validate_price(Money::from_cents(0)).is_ok());
/// assert!(validate_price(Money::from_cents(105)).is_err());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    if !price.is_multiple_of(PRICE_STEP) {
        return Err(ValidationError::NotAMultiple {
            field: "price".to_string(),
            step: PRICE_STEP,
        });
    }

    Ok(())
}

/// Validates a stock quantity.
///
/// ## Rules
/// - Must be between 0 and MAX_STOCK (10)
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if !(0..=MAX_STOCK).contains(&quantity) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_STOCK,
        });
    }

    Ok(())
}

// =============================================================================
// Parsers
// =============================================================================

/// Parses and validates a price typed by the operator.
pub fn parse_price(input: &str) -> ValidationResult<Money> {
    let price: Money = input.parse()?;
    validate_price(price)?;
    Ok(price)
}

/// Parses a whole number typed by the operator.
///
/// Range checks are left to the caller: the stock methods report an
/// overflow with the drink's name, which is more useful than a bare range.
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let input = input.trim();
    input
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: format!("'{}' is not a whole number", input),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
