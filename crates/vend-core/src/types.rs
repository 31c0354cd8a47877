//! # Domain Types
//!
//! Core domain types used throughout the vending machine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    DrinkKey     │   │      Drink      │   │      Coin       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  brand          │◄──│  key            │   │  €0.10  €0.20   │       │
//! │  │  subtype ("")   │   │  price (Money)  │   │  €0.50  €1.00   │       │
//! │  └─────────────────┘   │  quantity 0..10 │   │  €2.00          │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A drink is identified by `(brand, subtype)`. The subtype may be empty, so
//! "Bier" and "Bier Alcoholvrij" are two different drinks.

use std::fmt;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::MAX_STOCK;

// =============================================================================
// Drink Key
// =============================================================================

/// The unique key of a drink within one inventory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrinkKey {
    pub brand: String,
    pub subtype: String,
}

impl DrinkKey {
    pub fn new(brand: impl Into<String>, subtype: impl Into<String>) -> Self {
        DrinkKey {
            brand: brand.into(),
            subtype: subtype.into(),
        }
    }
}

/// `"Bier Alcoholvrij"`, or just `"Melk"` when there is no subtype.
impl fmt::Display for DrinkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.subtype.is_empty() {
            write!(f, "{}", self.brand)
        } else {
            write!(f, "{} {}", self.brand, self.subtype)
        }
    }
}

// =============================================================================
// Drink
// =============================================================================

/// A drink in the machine.
///
/// ## Invariants
/// - `0 <= quantity <= MAX_STOCK`
/// - `price` is never negative
///
/// Every mutating method checks before it writes, so a failed call leaves the
/// drink exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drink {
    key: DrinkKey,
    price: Money,
    quantity: i64,
}

impl Drink {
    /// Creates a drink, rejecting quantities outside `0..=MAX_STOCK` and
    /// negative prices.
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::{Drink, Money};
    ///
    /// let melk = Drink::new("Melk", "", Money::from_cents(250), 10).unwrap();
    /// assert_eq!(melk.name(), "Melk");
    /// assert!(Drink::new("Melk", "", Money::from_cents(250), 11).is_err());
    /// ```
    pub fn new(
        brand: impl Into<String>,
        subtype: impl Into<String>,
        price: Money,
        quantity: i64,
    ) -> CoreResult<Self> {
        let key = DrinkKey::new(brand, subtype);

        if price.is_negative() {
            return Err(ValidationError::MustBeNonNegative {
                field: "price".to_string(),
            }
            .into());
        }
        if quantity < 0 {
            return Err(CoreError::InvalidAmount { amount: quantity });
        }
        if quantity > MAX_STOCK {
            return Err(CoreError::StockOverflow {
                drink: key.to_string(),
                max: MAX_STOCK,
                requested: quantity,
            });
        }

        Ok(Drink {
            key,
            price,
            quantity,
        })
    }

    #[inline]
    pub fn key(&self) -> &DrinkKey {
        &self.key
    }

    #[inline]
    pub fn brand(&self) -> &str {
        &self.key.brand
    }

    #[inline]
    pub fn subtype(&self) -> &str {
        &self.key.subtype
    }

    /// Display name, e.g. "Karnemelk met prik".
    pub fn name(&self) -> String {
        self.key.to_string()
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// True iff at least one item is left.
    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Takes `amount` items out of the machine.
    pub fn reduce_stock(&mut self, amount: i64) -> CoreResult<()> {
        if amount < 0 {
            return Err(CoreError::InvalidAmount { amount });
        }
        if amount > self.quantity {
            return Err(CoreError::InsufficientStock {
                drink: self.name(),
                available: self.quantity,
                requested: amount,
            });
        }
        self.quantity -= amount;
        Ok(())
    }

    /// Adds `amount` items, bounded by [`MAX_STOCK`].
    pub fn increase_stock(&mut self, amount: i64) -> CoreResult<()> {
        if amount < 0 {
            return Err(CoreError::InvalidAmount { amount });
        }
        let requested = self.quantity + amount;
        if requested > MAX_STOCK {
            return Err(CoreError::StockOverflow {
                drink: self.name(),
                max: MAX_STOCK,
                requested,
            });
        }
        self.quantity = requested;
        Ok(())
    }

    /// Sets the absolute stock level (operator "change quantity").
    pub fn change_stock(&mut self, quantity: i64) -> CoreResult<()> {
        if quantity > MAX_STOCK {
            return Err(CoreError::StockOverflow {
                drink: self.name(),
                max: MAX_STOCK,
                requested: quantity,
            });
        }
        if quantity < 0 {
            return Err(CoreError::InvalidAmount { amount: quantity });
        }
        self.quantity = quantity;
        Ok(())
    }

    /// Fills the drink up to [`MAX_STOCK`] directly, without going through
    /// the bounded [`Drink::increase_stock`] path.
    pub fn restock(&mut self) {
        self.quantity = MAX_STOCK;
    }

    /// Replaces the price. Only non-negative prices are accepted here; the
    /// ten-cent step is enforced by [`crate::validation::validate_price`].
    pub fn set_price(&mut self, price: Money) -> CoreResult<()> {
        if price.is_negative() {
            return Err(ValidationError::MustBeNonNegative {
                field: "price".to_string(),
            }
            .into());
        }
        self.price = price;
        Ok(())
    }
}

// =============================================================================
// Coin
// =============================================================================

/// The coins the machine accepts, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coin {
    TenCents,
    TwentyCents,
    FiftyCents,
    OneEuro,
    TwoEuros,
}

impl Coin {
    /// All accepted coins; menu choice `n` maps to `ALL[n - 1]`.
    pub const ALL: [Coin; 5] = [
        Coin::TenCents,
        Coin::TwentyCents,
        Coin::FiftyCents,
        Coin::OneEuro,
        Coin::TwoEuros,
    ];

    pub const fn value(self) -> Money {
        match self {
            Coin::TenCents => Money::from_cents(10),
            Coin::TwentyCents => Money::from_cents(20),
            Coin::FiftyCents => Money::from_cents(50),
            Coin::OneEuro => Money::from_cents(100),
            Coin::TwoEuros => Money::from_cents(200),
        }
    }

    /// Maps a 1-based menu choice onto a coin.
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::Coin;
    ///
    /// assert_eq!(Coin::from_choice(1), Some(Coin::TenCents));
    /// assert_eq!(Coin::from_choice(5), Some(Coin::TwoEuros));
    /// assert_eq!(Coin::from_choice(0), None);
    /// assert_eq!(Coin::from_choice(6), None);
    /// ```
    pub fn from_choice(choice: usize) -> Option<Coin> {
        choice
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn melk(quantity: i64) -> Drink {
        Drink::new("Melk", "", Money::from_cents(250), quantity).unwrap()
    }

    #[test]
    fn test_key_display() {
        assert_eq!(DrinkKey::new("Melk", "").to_string(), "Melk");
        assert_eq!(
            DrinkKey::new("Bier", "Alcoholvrij").to_string(),
            "Bier Alcoholvrij"
        );
    }

    #[test]
    fn test_new_rejects_out_of_bounds() {
        assert_eq!(
            Drink::new("Melk", "", Money::from_cents(250), -1),
            Err(CoreError::InvalidAmount { amount: -1 })
        );
        assert!(matches!(
            Drink::new("Melk", "", Money::from_cents(250), 11),
            Err(CoreError::StockOverflow { requested: 11, .. })
        ));
        assert!(matches!(
            Drink::new("Melk", "", Money::from_cents(-10), 1),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_reduce_stock() {
        let mut drink = melk(3);
        drink.reduce_stock(2).unwrap();
        assert_eq!(drink.quantity(), 1);

        assert_eq!(
            drink.reduce_stock(-1),
            Err(CoreError::InvalidAmount { amount: -1 })
        );
        assert!(matches!(
            drink.reduce_stock(2),
            Err(CoreError::InsufficientStock {
                available: 1,
                requested: 2,
                ..
            })
        ));
        assert_eq!(drink.quantity(), 1);

        drink.reduce_stock(1).unwrap();
        assert!(!drink.is_in_stock());
    }

    #[test]
    fn test_increase_stock_is_bounded() {
        let mut drink = melk(8);
        drink.increase_stock(2).unwrap();
        assert_eq!(drink.quantity(), MAX_STOCK);

        assert!(matches!(
            drink.increase_stock(1),
            Err(CoreError::StockOverflow { requested: 11, .. })
        ));
        assert!(drink.increase_stock(-1).is_err());
        assert_eq!(drink.quantity(), MAX_STOCK);
    }

    #[test]
    fn test_stock_stays_in_bounds_over_mixed_sequence() {
        let mut drink = melk(5);
        let steps: [(bool, i64); 8] = [
            (true, 4),
            (true, 3),
            (false, 9),
            (false, 2),
            (true, 20),
            (false, -3),
            (true, -1),
            (false, 1),
        ];

        for (increase, amount) in steps {
            let before = drink.quantity();
            let result = if increase {
                drink.increase_stock(amount)
            } else {
                drink.reduce_stock(amount)
            };
            if result.is_err() {
                assert_eq!(drink.quantity(), before);
            }
            assert!((0..=MAX_STOCK).contains(&drink.quantity()));
        }
    }

    #[test]
    fn test_change_stock() {
        let mut drink = melk(5);
        assert!(drink.change_stock(0).is_ok());
        assert_eq!(drink.quantity(), 0);
        assert!(drink.change_stock(MAX_STOCK).is_ok());

        assert!(drink.change_stock(MAX_STOCK + 1).is_err());
        assert!(drink.change_stock(-2).is_err());
        assert_eq!(drink.quantity(), MAX_STOCK);
    }

    #[test]
    fn test_restock_sets_max_directly() {
        let mut drink = melk(0);
        drink.restock();
        assert_eq!(drink.quantity(), MAX_STOCK);
    }

    #[test]
    fn test_coin_values_ascending() {
        let values: Vec<i64> = Coin::ALL.iter().map(|c| c.value().cents()).collect();
        assert_eq!(values, vec![10, 20, 50, 100, 200]);
        assert_eq!(Coin::FiftyCents.to_string(), "€0.50");
    }
}
