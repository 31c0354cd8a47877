//! # Vending Machine
//!
//! One purchase is one cycle through these states:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Browsing ──number──► Selected ──► Paying ──paid──► Dispensing ──┐    │
//! │     ▲  │                              │                           │    │
//! │     │  │                          "0" cancel                      │    │
//! │     │  │                              │                           │    │
//! │     │  └──hidden code──► Maintenance  │                           │    │
//! │     │                        │        │                           │    │
//! │     └────────────────────────┴────────┴───────────────────────────┘    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only [`VendingMachine::dispense_drink`] and the maintenance menu change
//! the inventory. Pauses are presentation only; the console decides whether
//! to honour them.

use std::time::Duration;

use tracing::{debug, info, warn};
use vend_core::{change_due, Coin, DrinkKey, Inventory, Money, PaymentSession};

use crate::config::StockEntry;
use crate::console::Console;
use crate::error::{AppError, AppResult};
use crate::input::{CoinInput, SelectionInput};
use crate::maintenance_menu;
use crate::text;

const SOLD_OUT_PAUSE: Duration = Duration::from_secs(2);
const REFUND_PAUSE: Duration = Duration::from_secs(4);
const CHANGE_PAUSES: [Duration; 3] = [
    Duration::from_secs(1),
    Duration::from_secs(2),
    Duration::from_secs(1),
];
const DISPENSE_PAUSES: [Duration; 4] = [
    Duration::from_secs(1),
    Duration::from_secs(2),
    Duration::from_secs(2),
    Duration::from_secs(3),
];

/// The drink picked at the selection prompt, with the price it was offered
/// at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub key: DrinkKey,
    pub price: Money,
}

impl Selection {
    pub fn name(&self) -> String {
        self.key.to_string()
    }
}

/// How a single cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Sold out, maintenance visit, or nothing chosen.
    NoSelection,
    /// Customer cancelled the payment.
    Cancelled,
    Dispensed,
    /// Stock could not be reduced; the customer got their money back.
    DispenseFailed,
}

pub struct VendingMachine {
    inventory: Inventory,
    maintenance_code: String,
}

impl VendingMachine {
    pub fn new(maintenance_code: impl Into<String>) -> Self {
        Self::with_inventory(Inventory::new(), maintenance_code)
    }

    pub fn with_inventory(inventory: Inventory, maintenance_code: impl Into<String>) -> Self {
        VendingMachine {
            inventory,
            maintenance_code: maintenance_code.into(),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Loads the starter stock. Fails on an invalid or duplicate entry.
    pub fn setup_stock(&mut self, stock: &[StockEntry]) -> AppResult<()> {
        for entry in stock {
            self.inventory.add_drink(entry.to_drink()?)?;
        }
        if self.inventory.is_empty() {
            warn!("Machine started without any stock");
        }
        info!(drinks = self.inventory.len(), "Stock loaded");
        Ok(())
    }

    /// Runs select → pay → change → dispense until input is closed.
    pub fn start(&mut self, console: &mut dyn Console) -> AppResult<()> {
        info!("Vending machine started");
        loop {
            match self.run_cycle(console) {
                Ok(outcome) => debug!(?outcome, "Cycle finished"),
                Err(AppError::InputClosed) => {
                    info!("Input closed, shutting down");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// One pass through the purchase states.
    pub fn run_cycle(&mut self, console: &mut dyn Console) -> AppResult<CycleOutcome> {
        let Some(selection) = self.select_drink(console)? else {
            return Ok(CycleOutcome::NoSelection);
        };

        let Some(total) = Self::insert_money(console, &selection)? else {
            return Ok(CycleOutcome::Cancelled);
        };

        Self::return_change(console, &selection, total)?;

        if self.dispense_drink(console, &selection)? {
            Ok(CycleOutcome::Dispensed)
        } else {
            Ok(CycleOutcome::DispenseFailed)
        }
    }

    fn display_drinks(&self, console: &mut dyn Console) -> AppResult<()> {
        for (position, drink) in self.inventory.positions() {
            console.write_line(&text::catalog_line(position, drink))?;
        }
        Ok(())
    }

    /// Shows the catalog until a drink in stock is chosen.
    ///
    /// Returns `None` for a sold-out drink and after a maintenance visit;
    /// anything unrecognised re-prompts.
    pub fn select_drink(&mut self, console: &mut dyn Console) -> AppResult<Option<Selection>> {
        console.clear()?;

        loop {
            console.write_line(text::AVAILABLE_PRODUCTS)?;
            self.display_drinks(console)?;
            let line = console.read_line(text::SELECT_PROMPT)?;

            match SelectionInput::parse(&line, &self.maintenance_code) {
                SelectionInput::MaintenanceEntry => {
                    console.clear()?;
                    maintenance_menu::run(console, &mut self.inventory)?;
                    return Ok(None);
                }
                SelectionInput::Choice(position) => match self.inventory.get_position(position) {
                    Some(drink) if !drink.is_in_stock() => {
                        debug!(drink = %drink.key(), "Sold out drink selected");
                        console.write_line(text::SOLD_OUT)?;
                        console.pause(SOLD_OUT_PAUSE);
                        return Ok(None);
                    }
                    Some(drink) => {
                        let selection = Selection {
                            key: drink.key().clone(),
                            price: drink.price(),
                        };
                        info!(drink = %selection.key, price = %selection.price, "Drink selected");
                        console.clear()?;
                        return Ok(Some(selection));
                    }
                    None => {}
                },
                SelectionInput::Invalid => {}
            }

            console.clear()?;
            console.write_line(text::INVALID_CHOICE)?;
        }
    }

    /// Collects coins until the price is covered.
    ///
    /// Returns the total inserted, or `None` if the customer cancelled (their
    /// money is reported back and the inventory is untouched).
    pub fn insert_money(
        console: &mut dyn Console,
        selection: &Selection,
    ) -> AppResult<Option<Money>> {
        let mut session = PaymentSession::new(selection.price);
        let name = selection.name();

        while !session.is_paid() {
            console.write_line(&text::pay_request(selection.price, &name))?;
            console.write_line(text::OPTIONS)?;
            for (index, coin) in Coin::ALL.into_iter().enumerate() {
                console.write_line(&text::coin_option(index + 1, coin))?;
            }
            console.write_line(text::CANCEL_OPTION)?;
            console.write_line(&text::total_inserted(session.inserted()))?;

            let line = console.read_line(text::COIN_PROMPT)?;
            console.clear()?;

            match CoinInput::parse(&line) {
                CoinInput::Coin(coin) => {
                    let status = session.insert(coin);
                    debug!(coin = %coin, total = %session.inserted(), ?status, "Coin inserted");
                }
                CoinInput::Cancel => {
                    let refund = session.cancel();
                    info!(drink = %selection.key, refund = %refund, "Payment cancelled");
                    console.write_line(text::PAYMENT_CANCELLED)?;
                    console.write_line(&text::refund(refund))?;
                    console.pause(REFUND_PAUSE);
                    console.clear()?;
                    return Ok(None);
                }
                CoinInput::Invalid => console.write_line(text::INVALID_CHOICE)?,
            }
        }

        let total = session.inserted();
        let coins = session.coins().len();
        let change = session.settle()?;
        info!(drink = %selection.key, total = %total, coins, change = %change, "Payment complete");
        Ok(Some(total))
    }

    /// Pays out `total - price` when it is not zero. Returns the change given.
    pub fn return_change(
        console: &mut dyn Console,
        selection: &Selection,
        total: Money,
    ) -> AppResult<Option<Money>> {
        let Some(change) = change_due(selection.price, total) else {
            return Ok(None);
        };

        info!(change = %change, "Returning change");
        console.write_line(&text::change_returned(change))?;
        console.pause(CHANGE_PAUSES[0]);
        console.write_line(text::CHANGE_SOUND)?;
        console.pause(CHANGE_PAUSES[1]);
        console.write_line(text::CHANGE_SOUND_END)?;
        console.pause(CHANGE_PAUSES[2]);

        Ok(Some(change))
    }

    /// Takes one item out of stock and plays the dispensing sequence.
    ///
    /// A stock error is reported to the customer and yields `false`.
    pub fn dispense_drink(
        &mut self,
        console: &mut dyn Console,
        selection: &Selection,
    ) -> AppResult<bool> {
        if let Err(err) = self.inventory.reduce_amount(&selection.key, 1) {
            warn!(drink = %selection.key, error = %err, "Dispense failed");
            console.write_line(&text::dispense_failed(&err, selection.price))?;
            console.pause(REFUND_PAUSE);
            return Ok(false);
        }

        console.write_line(&text::dispensing(&selection.name()))?;
        console.pause(DISPENSE_PAUSES[0]);
        console.write_line(text::DISPENSE_SOUND)?;
        console.pause(DISPENSE_PAUSES[1]);
        console.write_line(text::DISPENSE_SOUND_END)?;
        console.pause(DISPENSE_PAUSES[2]);
        console.write_line(text::THANK_YOU)?;
        console.pause(DISPENSE_PAUSES[3]);
        console.clear()?;

        info!(drink = %selection.key, "Drink dispensed");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_stock;
    use crate::test_support::ScriptedConsole;
    use vend_core::{CoreError, ValidationError, MAX_STOCK};

    const CODE: &str = "adminadmin";

    fn machine() -> VendingMachine {
        let mut machine = VendingMachine::new(CODE);
        machine.setup_stock(&default_stock()).unwrap();
        machine
    }

    fn quantity(machine: &VendingMachine, brand: &str, subtype: &str) -> i64 {
        machine
            .inventory()
            .get_drink(&DrinkKey::new(brand, subtype))
            .unwrap()
            .quantity()
    }

    fn selection(brand: &str, subtype: &str, cents: i64) -> Selection {
        Selection {
            key: DrinkKey::new(brand, subtype),
            price: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_setup_stock_seeds_in_order() {
        let machine = machine();
        let names: Vec<String> = machine.inventory().iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            vec![
                "Melk",
                "Bier",
                "Bier Alcoholvrij",
                "Karnemelk",
                "Karnemelk met prik"
            ]
        );
    }

    #[test]
    fn test_setup_stock_rejects_duplicates() {
        let mut machine = machine();
        let err = machine
            .setup_stock(&[StockEntry::new("Melk", "", Money::from_cents(250), 1)])
            .unwrap_err();
        assert!(matches!(err, AppError::Core(CoreError::DuplicateDrink(_))));
    }

    #[test]
    fn test_setup_stock_applies_maintenance_rules() {
        let mut machine = VendingMachine::new(CODE);

        let err = machine
            .setup_stock(&[StockEntry::new("", "", Money::from_cents(100), 1)])
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Core(CoreError::Validation(ValidationError::Required { .. }))
        ));

        let err = machine
            .setup_stock(&[StockEntry::new("Cola", "", Money::from_cents(105), 1)])
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Core(CoreError::Validation(ValidationError::NotAMultiple { .. }))
        ));
        assert!(machine.inventory().is_empty());
    }

    #[test]
    fn test_exact_payment_skips_change_and_dispenses() {
        let mut machine = machine();
        // Melk, then €1.00 + €1.00 + €0.50
        let mut console = ScriptedConsole::new(["1", "4", "4", "3"]);

        let outcome = machine.run_cycle(&mut console).unwrap();

        assert_eq!(outcome, CycleOutcome::Dispensed);
        assert_eq!(quantity(&machine, "Melk", ""), 9);
        assert!(!console.saw("wisselgeld"));
        assert!(console.saw("Melk wordt uitgegeven..."));
        assert!(console.saw("Bedankt voor uw aankoop!"));
        assert!(console.saw("Totaal ingevoerd: €2.00"));

        let transcript = console.transcript();
        let paying = transcript.find("Totaal ingevoerd: €2.00").unwrap();
        let dispensing = transcript.find("Melk wordt uitgegeven...").unwrap();
        assert!(paying < dispensing);
    }

    #[test]
    fn test_overpayment_returns_exact_change() {
        let mut machine = machine();
        // Karnemelk met prik (€1.80), paid with €2.00
        let mut console = ScriptedConsole::new(["5", "5"]);

        assert_eq!(machine.run_cycle(&mut console).unwrap(), CycleOutcome::Dispensed);
        assert!(console.saw("Uw wisselgeld komt het bakje in rollen: €0.20"));
        assert_eq!(quantity(&machine, "Karnemelk", "met prik"), 0);
    }

    #[test]
    fn test_return_change() {
        let mut console = ScriptedConsole::default();
        let karnemelk = selection("Karnemelk", "met prik", 180);

        assert_eq!(
            VendingMachine::return_change(&mut console, &karnemelk, Money::from_cents(200)).unwrap(),
            Some(Money::from_cents(20))
        );
        assert_eq!(
            VendingMachine::return_change(&mut console, &karnemelk, Money::from_cents(180)).unwrap(),
            None
        );
        assert_eq!(console.count("wisselgeld"), 1);
    }

    #[test]
    fn test_sold_out_never_reaches_payment() {
        let mut machine = machine();
        let mut console = ScriptedConsole::new(["5", "5", "5"]);

        assert_eq!(machine.run_cycle(&mut console).unwrap(), CycleOutcome::Dispensed);
        assert_eq!(quantity(&machine, "Karnemelk", "met prik"), 0);

        let prompts_before = console.count(text::COIN_PROMPT);
        assert_eq!(machine.run_cycle(&mut console).unwrap(), CycleOutcome::NoSelection);
        assert!(console.saw(text::SOLD_OUT));
        assert!(console.saw("5. Karnemelk met prik: €1.80 - UITVERKOCHT"));
        assert_eq!(console.count(text::COIN_PROMPT), prompts_before);
        assert_eq!(console.pauses.last(), Some(&SOLD_OUT_PAUSE));
    }

    #[test]
    fn test_cancel_refunds_and_leaves_stock() {
        let mut machine = machine();
        let before = machine.inventory().clone();
        let mut console = ScriptedConsole::new(["3", "5", "4", "0"]);

        assert_eq!(machine.run_cycle(&mut console).unwrap(), CycleOutcome::Cancelled);
        assert!(console.saw(text::PAYMENT_CANCELLED));
        assert!(console.saw("Uw geld wordt geretourneerd: €3.00"));
        assert_eq!(machine.inventory(), &before);
    }

    #[test]
    fn test_malformed_input_reprompts_without_state_change() {
        let mut machine = machine();
        let mut console = ScriptedConsole::new([
            "x", "0", "9", // invalid selections
            "2", // Bier €1.00
            "abc", "7", // invalid coins
            "3", "3", // €0.50 + €0.50
        ]);

        assert_eq!(machine.run_cycle(&mut console).unwrap(), CycleOutcome::Dispensed);
        assert_eq!(console.count(text::INVALID_CHOICE), 5);
        assert!(!console.saw("wisselgeld"));
        assert!(console.saw("Totaal ingevoerd: €0.50"));
        assert!(!console.saw("Totaal ingevoerd: €0.60"));
        assert_eq!(quantity(&machine, "Bier", ""), 4);
    }

    #[test]
    fn test_hidden_code_opens_maintenance() {
        let mut machine = machine();
        let mut console = ScriptedConsole::new([CODE, "5", "7"]);

        assert_eq!(machine.run_cycle(&mut console).unwrap(), CycleOutcome::NoSelection);
        assert!(console.saw("Onderhoudsmenu:"));
        assert!(machine
            .inventory()
            .iter()
            .all(|drink| drink.quantity() == MAX_STOCK));
    }

    #[test]
    fn test_rejected_maintenance_add_keeps_catalog() {
        let mut machine = machine();
        let mut console = ScriptedConsole::new([
            CODE, "1", "Cola", "", "1.05", "7", // rejected add
            "x",
        ]);

        assert_eq!(machine.run_cycle(&mut console).unwrap(), CycleOutcome::NoSelection);
        assert!(machine.inventory().get_drink(&DrinkKey::new("Cola", "")).is_err());
        assert!(matches!(
            machine.run_cycle(&mut console),
            Err(AppError::InputClosed)
        ));
        assert!(!console.saw("Cola:"));
    }

    #[test]
    fn test_start_runs_until_input_closes() {
        let mut machine = machine();
        let mut console = ScriptedConsole::new(["2", "4", "2", "4"]);

        machine.start(&mut console).unwrap();

        assert_eq!(quantity(&machine, "Bier", ""), 3);
        assert_eq!(console.count("Bier wordt uitgegeven..."), 2);
        assert_eq!(console.remaining_inputs(), 0);
    }

    #[test]
    fn test_dispense_missing_drink_is_reported() {
        let mut machine = machine();
        let mut console = ScriptedConsole::default();
        let cola = selection("Cola", "", 200);

        assert!(!machine.dispense_drink(&mut console, &cola).unwrap());
        assert!(console.saw("Het product kon niet worden uitgegeven"));
        assert!(console.saw("Uw geld wordt geretourneerd: €2.00"));
    }

    #[test]
    fn test_dispense_pacing() {
        let mut machine = machine();
        let mut console = ScriptedConsole::default();

        assert!(machine
            .dispense_drink(&mut console, &selection("Melk", "", 250))
            .unwrap());
        assert_eq!(console.pauses, DISPENSE_PAUSES.to_vec());
        assert_eq!(console.clears, 1);
    }

    #[test]
    fn test_free_drink_needs_no_coins() {
        let mut inventory = Inventory::new();
        inventory
            .add_drink(vend_core::Drink::new("Water", "", Money::zero(), 2).unwrap())
            .unwrap();
        let mut machine = VendingMachine::with_inventory(inventory, CODE);
        let mut console = ScriptedConsole::new(["1"]);

        assert_eq!(machine.run_cycle(&mut console).unwrap(), CycleOutcome::Dispensed);
        assert!(!console.saw(text::COIN_PROMPT));
    }
}
