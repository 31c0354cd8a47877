//! # Maintenance
//!
//! Operator actions over an [`Inventory`]. Every action validates first and
//! mutates second, so a rejected action leaves the catalog unchanged.
//!
//! Positions are the 1-based numbers shown in the maintenance listings.

use tracing::info;

use crate::error::{CoreResult, ValidationError};
use crate::inventory::Inventory;
use crate::money::Money;
use crate::types::Drink;
use crate::validation::{validate_brand, validate_price, validate_quantity};

/// Everything the operator enters when adding a drink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDrink {
    pub brand: String,
    pub subtype: String,
    pub price: Money,
    pub quantity: i64,
}

impl NewDrink {
    /// Checks brand, price and quantity, then builds the drink with brand and
    /// subtype trimmed. Startup stock goes through the same rules.
    pub fn into_drink(self) -> CoreResult<Drink> {
        validate_brand(&self.brand)?;
        validate_price(self.price)?;
        validate_quantity(self.quantity)?;

        Drink::new(
            self.brand.trim(),
            self.subtype.trim(),
            self.price,
            self.quantity,
        )
    }
}

/// Facade the maintenance menu works through.
#[derive(Debug)]
pub struct Maintenance<'a> {
    inventory: &'a mut Inventory,
}

impl<'a> Maintenance<'a> {
    pub fn new(inventory: &'a mut Inventory) -> Self {
        Maintenance { inventory }
    }

    /// Read-only view for the listings.
    pub fn inventory(&self) -> &Inventory {
        &*self.inventory
    }

    /// Adds a drink after checking brand, price, quantity and key.
    ///
    /// Nothing is inserted unless every check passes.
    pub fn add_drink(&mut self, new: NewDrink) -> CoreResult<&Drink> {
        let added = self.inventory.add_drink(new.into_drink()?)?;
        info!(drink = %added.key(), price = %added.price(), quantity = added.quantity(), "Maintenance: drink added");
        Ok(added)
    }

    /// Removes the drink at `position`. Out of range is a no-op.
    pub fn remove_at(&mut self, position: usize) -> Option<Drink> {
        let key = self.inventory.get_position(position)?.key().clone();
        let removed = self.inventory.remove_drink(&key);
        if removed.is_some() {
            info!(drink = %key, "Maintenance: drink removed");
        }
        removed
    }

    /// Sets the absolute stock of the drink at `position`.
    pub fn change_quantity(&mut self, position: usize, quantity: i64) -> CoreResult<&Drink> {
        let drink = self.drink_at_mut(position)?;
        drink.change_stock(quantity)?;
        info!(drink = %drink.key(), quantity, "Maintenance: quantity changed");
        Ok(drink)
    }

    /// Fills every drink to [`crate::MAX_STOCK`].
    pub fn restock_all(&mut self) {
        self.inventory.restock_all();
        info!(drinks = self.inventory.len(), "Maintenance: all drinks restocked");
    }

    /// Sets the price of the drink at `position`, ten-cent steps only.
    pub fn change_price(&mut self, position: usize, price: Money) -> CoreResult<&Drink> {
        validate_price(price)?;
        let drink = self.drink_at_mut(position)?;
        drink.set_price(price)?;
        info!(drink = %drink.key(), price = %price, "Maintenance: price changed");
        Ok(drink)
    }

    fn drink_at_mut(&mut self, position: usize) -> CoreResult<&mut Drink> {
        let len = self.inventory.len();
        self.inventory.get_position_mut(position).ok_or_else(|| {
            ValidationError::OutOfRange {
                field: "position".to_string(),
                min: 1,
                max: len as i64,
            }
            .into()
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
