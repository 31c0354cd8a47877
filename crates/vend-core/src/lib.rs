//! # vend-core: Pure Business Logic for the Vending Machine
//!
//! This crate holds everything the machine *knows*: which drinks exist, how
//! many are left, what they cost and how a coin payment progresses. It never
//! reads input, prints output or sleeps; the console app drives it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Vending Machine Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Console App (apps/console)                      │   │
//! │  │   select drink ──► insert coins ──► return change ──► dispense  │   │
//! │  │          │                                                      │   │
//! │  │          └──► hidden code ──► maintenance menu                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vend-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ inventory │  │  payment  │  │maintenance│  │   │
//! │  │   │   Drink   │  │ Inventory │  │  Payment  │  │Maintenance│  │   │
//! │  │   │   Coin    │  │ DrinkKey  │  │  Session  │  │ NewDrink  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONSOLE • NO SLEEPING • PURE STATE               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Drink, DrinkKey, Coin)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`inventory`] - Insertion-ordered drink catalog
//! - [`maintenance`] - Operator actions over an inventory
//! - [`payment`] - Coin accumulation and change
//! - [`error`] - Domain error types
//! - [`validation`] - Price and quantity rules
//!
//! ## Example Usage
//!
//! ```rust
//! use vend_core::{Coin, Drink, DrinkKey, Inventory, Money, PaymentSession};
//!
//! let mut inventory = Inventory::new();
//! inventory
//!     .add_drink(Drink::new("Karnemelk", "met prik", Money::from_cents(180), 1).unwrap())
//!     .unwrap();
//!
//! let key = DrinkKey::new("Karnemelk", "met prik");
//! let mut session = PaymentSession::new(inventory.get_drink(&key).unwrap().price());
//! session.insert(Coin::TwoEuros);
//!
//! assert_eq!(session.change(), Some(Money::from_cents(20)));
//! inventory.reduce_amount(&key, 1).unwrap();
//! assert!(!inventory.is_in_stock(&key).unwrap());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod maintenance;
pub mod money;
pub mod payment;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use maintenance::{Maintenance, NewDrink};
pub use money::Money;
pub use payment::{change_due, PaymentSession, PaymentStatus};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of items of one drink the machine can hold.
pub const MAX_STOCK: i64 = 10;

/// Prices must be a whole multiple of this step (ten cents).
pub const PRICE_STEP: Money = Money::from_cents(10);
