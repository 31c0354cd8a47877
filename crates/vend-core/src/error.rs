//! # Error Types
//!
//! Domain-specific error types for vend-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vend-core errors (this file)                                          │
//! │  ├── CoreError        - Stock bounds, catalog keys, payment            │
//! │  └── ValidationError  - Operator/user input that breaks a rule         │
//! │                                                                         │
//! │  console app errors (apps/console)                                     │
//! │  └── AppError         - I/O, closed input, config                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → message on screen                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these ever ends the program: the console layer turns each one into
//! a message and goes back to the menu it came from.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A stock amount was negative.
    #[error("Amount must be a non-negative number, got {amount}")]
    InvalidAmount { amount: i64 },

    /// Taking more items than the machine holds.
    ///
    /// ## User Workflow
    /// ```text
    /// Dispense Karnemelk met prik
    ///      │
    ///      ▼
    /// Check stock: available=0
    ///      │
    ///      ▼
    /// InsufficientStock { drink: "Karnemelk met prik", available: 0, requested: 1 }
    /// ```
    #[error("Not enough {drink} in stock: available {available}, requested {requested}")]
    InsufficientStock {
        drink: String,
        available: i64,
        requested: i64,
    },

    /// A stock level would exceed [`crate::MAX_STOCK`].
    #[error("Can't have more than {max} items of {drink} (requested {requested})")]
    StockOverflow {
        drink: String,
        max: i64,
        requested: i64,
    },

    /// The (brand, subtype) pair is already in the inventory.
    #[error("Drink {0} already exists in the inventory")]
    DuplicateDrink(String),

    /// The (brand, subtype) pair is not in the inventory.
    #[error("Drink {0} does not exist in the inventory")]
    DrinkNotFound(String),

    /// A payment was settled before enough coins were inserted.
    #[error("Payment incomplete: {inserted} inserted for a price of {price}")]
    InsufficientPayment { price: Money, inserted: Money },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be below zero.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value must be a whole multiple of a step (prices in ten-cent steps).
    #[error("{field} must be a multiple of {step}")]
    NotAMultiple { field: String, step: Money },

    /// Input could not be parsed.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
