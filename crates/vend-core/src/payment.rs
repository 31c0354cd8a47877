//! # Payment
//!
//! The coin payment for one purchase attempt.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   new(price) ──► Pending { remaining } ──insert(coin)──┐               │
//! │                        ▲                               │               │
//! │                        └───────── total < price ◄──────┤               │
//! │                                                        │               │
//! │                                    total >= price      ▼               │
//! │                                              Paid { change }           │
//! │                                                        │               │
//! │   cancel() ──► refund = everything inserted       settle() ──► change  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A session never touches the inventory. Cancelling simply drops it, so a
//! cancelled purchase leaves nothing behind.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Coin;

/// Where a payment stands after the last coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    /// More coins are needed.
    Pending { remaining: Money },
    /// Enough has been inserted; `change` may be zero.
    Paid { change: Money },
}

/// Accumulates coins towards a fixed price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSession {
    price: Money,
    inserted: Money,
    coins: Vec<Coin>,
}

impl PaymentSession {
    /// Starts a session for `price`, with nothing inserted yet.
    pub fn new(price: Money) -> Self {
        PaymentSession {
            price,
            inserted: Money::zero(),
            coins: Vec::new(),
        }
    }

    /// Total inserted so far.
    #[inline]
    pub fn inserted(&self) -> Money {
        self.inserted
    }

    /// Coins in the order they were inserted.
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    /// True once the inserted total covers the price.
    #[inline]
    pub fn is_paid(&self) -> bool {
        self.inserted >= self.price
    }

    /// Amount still owed, never negative.
    fn remaining(&self) -> Money {
        if self.is_paid() {
            Money::zero()
        } else {
            self.price - self.inserted
        }
    }

    /// Change owed right now, if any.
    pub fn change(&self) -> Option<Money> {
        change_due(self.price, self.inserted)
    }

    pub fn status(&self) -> PaymentStatus {
        if self.is_paid() {
            PaymentStatus::Paid {
                change: self.inserted - self.price,
            }
        } else {
            PaymentStatus::Pending {
                remaining: self.remaining(),
            }
        }
    }

    /// Adds a coin. The total only ever grows.
    pub fn insert(&mut self, coin: Coin) -> PaymentStatus {
        self.inserted += coin.value();
        self.coins.push(coin);
        self.status()
    }

    /// Aborts the purchase and returns everything inserted.
    pub fn cancel(self) -> Money {
        self.inserted
    }

    /// Closes a fully paid session and returns the change (possibly zero).
    pub fn settle(self) -> CoreResult<Money> {
        if !self.is_paid() {
            return Err(CoreError::InsufficientPayment {
                price: self.price,
                inserted: self.inserted,
            });
        }
        Ok(self.inserted - self.price)
    }
}

/// Exact change for `inserted` against `price`; `None` when nothing is owed.
///
/// ## Example
/// ```rust
/// use vend_core::{change_due, Money};
///
/// assert_eq!(
///     change_due(Money::from_cents(180), Money::from_cents(200)),
///     Some(Money::from_cents(20))
/// );
/// assert_eq!(change_due(Money::from_cents(250), Money::from_cents(250)), None);
/// ```
pub fn change_due(price: Money, inserted: Money) -> Option<Money> {
    let change = inserted - price;
    change.is_positive().then_some(change)
}

// =============================================================================
// Unit Tests
// =============================================================================
