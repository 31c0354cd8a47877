//! # Inventory
//!
//! The drink catalog of one machine, keyed by [`DrinkKey`] and kept in
//! insertion order so the numbered menus stay stable.
//!
//! ## Positions
//! ```text
//! Insertion order      Display position
//! ───────────────      ────────────────
//! Melk             ──► 1
//! Bier             ──► 2
//! Bier Alcoholvrij ──► 3
//! ```
//! Removing a drink shifts the ones after it up by one; relative order never
//! changes.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{Drink, DrinkKey};

/// Insertion-ordered collection of drinks with unique keys.
///
/// The catalog is a handful of entries, so lookups scan the vector instead of
/// keeping a separate index in sync with removals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    drinks: Vec<Drink>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    fn index_of(&self, key: &DrinkKey) -> Option<usize> {
        self.drinks.iter().position(|drink| drink.key() == key)
    }

    /// Adds a new drink at the end of the catalog.
    ///
    /// Fails with [`CoreError::DuplicateDrink`] when the key is taken; the
    /// existing entry is left untouched.
    pub fn add_drink(&mut self, drink: Drink) -> CoreResult<&Drink> {
        if self.index_of(drink.key()).is_some() {
            return Err(CoreError::DuplicateDrink(drink.name()));
        }

        debug!(drink = %drink.key(), price = %drink.price(), quantity = drink.quantity(), "Drink added");
        self.drinks.push(drink);
        let last = self.drinks.len() - 1;
        Ok(&self.drinks[last])
    }

    pub fn get_drink(&self, key: &DrinkKey) -> CoreResult<&Drink> {
        self.index_of(key)
            .map(|index| &self.drinks[index])
            .ok_or_else(|| CoreError::DrinkNotFound(key.to_string()))
    }

    pub fn get_drink_mut(&mut self, key: &DrinkKey) -> CoreResult<&mut Drink> {
        match self.index_of(key) {
            Some(index) => Ok(&mut self.drinks[index]),
            None => Err(CoreError::DrinkNotFound(key.to_string())),
        }
    }

    /// Looks the drink up and takes `amount` items out.
    pub fn reduce_amount(&mut self, key: &DrinkKey, amount: i64) -> CoreResult<()> {
        let drink = self.get_drink_mut(key)?;
        drink.reduce_stock(amount)?;
        debug!(drink = %key, remaining = drink.quantity(), "Stock reduced");
        Ok(())
    }

    pub fn is_in_stock(&self, key: &DrinkKey) -> CoreResult<bool> {
        Ok(self.get_drink(key)?.is_in_stock())
    }

    /// Removes the drink if present. Removing a missing key is not an error.
    pub fn remove_drink(&mut self, key: &DrinkKey) -> Option<Drink> {
        let index = self.index_of(key)?;
        debug!(drink = %key, "Drink removed");
        Some(self.drinks.remove(index))
    }

    /// Sets every drink to [`crate::MAX_STOCK`].
    pub fn restock_all(&mut self) {
        for drink in &mut self.drinks {
            drink.restock();
        }
        debug!(drinks = self.drinks.len(), "All drinks restocked");
    }

    /// Drink at a 1-based display position.
    pub fn get_position(&self, position: usize) -> Option<&Drink> {
        position
            .checked_sub(1)
            .and_then(|index| self.drinks.get(index))
    }

    pub fn get_position_mut(&mut self, position: usize) -> Option<&mut Drink> {
        position
            .checked_sub(1)
            .and_then(move |index| self.drinks.get_mut(index))
    }

    /// Drinks with their 1-based display positions, in insertion order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, &Drink)> {
        self.drinks.iter().enumerate().map(|(index, drink)| (index + 1, drink))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Drink> {
        self.drinks.iter()
    }

    pub fn len(&self) -> usize {
        self.drinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
