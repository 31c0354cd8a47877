//! User-facing text (Dutch).
//!
//! Every string the machine shows lives here so the flow code only decides
//! *what* to say.

use vend_core::{Coin, CoreError, Drink, Money};

// =============================================================================
// Selection
// =============================================================================

pub const AVAILABLE_PRODUCTS: &str = "Beschikbare producten:";
pub const SELECT_PROMPT: &str = "\nVul het nummer van het product in: \n> ";
pub const SOLD_OUT: &str = "Dit product is uitverkocht.";
pub const INVALID_CHOICE: &str = "Ongeldige keuze, probeer opnieuw.\n";

/// `1. Bier Alcoholvrij: €9.50 - 3 beschikbaar`
pub fn catalog_line(position: usize, drink: &Drink) -> String {
    let status = if drink.is_in_stock() {
        format!("{} beschikbaar", drink.quantity())
    } else {
        "UITVERKOCHT".to_string()
    };
    format!("{}. {}: {} - {}", position, drink.name(), drink.price(), status)
}

// =============================================================================
// Payment
// =============================================================================

pub const OPTIONS: &str = "Opties:";
pub const CANCEL_OPTION: &str = "0. Betaling annuleren";
pub const COIN_PROMPT: &str = "Kies een munt: \n> ";
pub const PAYMENT_CANCELLED: &str = "Betaling geannuleerd.";

pub fn pay_request(price: Money, drink: &str) -> String {
    format!("Voer {} in om {} te kopen.\n", price, drink)
}

pub fn coin_option(choice: usize, coin: Coin) -> String {
    format!("{}. {}", choice, coin)
}

pub fn total_inserted(total: Money) -> String {
    format!("\nTotaal ingevoerd: {}\n", total)
}

pub fn refund(total: Money) -> String {
    format!("Uw geld wordt geretourneerd: {}", total)
}

// =============================================================================
// Change & Dispensing
// =============================================================================

pub const CHANGE_SOUND: &str = "pling plong pling plong";
pub const CHANGE_SOUND_END: &str = "pling\n";
pub const DISPENSE_SOUND: &str = "bzzzzzzt";
pub const DISPENSE_SOUND_END: &str = "plok\n";
pub const THANK_YOU: &str = "Bedankt voor uw aankoop!\nTot ziens!\n";

pub fn change_returned(change: Money) -> String {
    format!("Uw wisselgeld komt het bakje in rollen: {}", change)
}

pub fn dispensing(drink: &str) -> String {
    format!("{} wordt uitgegeven...", drink)
}

pub fn dispense_failed(err: &CoreError, price: Money) -> String {
    format!(
        "Het product kon niet worden uitgegeven ({}).\n{}",
        err,
        refund(price)
    )
}

// =============================================================================
// Maintenance
// =============================================================================

pub const MAINTENANCE_MENU: [&str; 8] = [
    "Onderhoudsmenu:",
    "1. Voeg product toe",
    "2. Verwijder product",
    "3. Verander hoeveelheid",
    "4. Toon voorraad",
    "5. Vul alles bij",
    "6. Verander prijs",
    "7. Sluit onderhoudsmenu",
];
pub const MENU_PROMPT: &str = "\n> ";

pub const BRAND_PROMPT: &str = "Merk: ";
pub const SUBTYPE_PROMPT: &str = "Subtype (optioneel): ";
pub const PRICE_PROMPT: &str = "Prijs (veelvoud van 0.10): ";
pub const QUANTITY_PROMPT: &str = "Aantal: ";
pub const REMOVE_PROMPT: &str = "\nWelk product wil je verwijderen? (nummer): ";
pub const CHANGE_QUANTITY_PROMPT: &str =
    "\nWelk product wil je de hoeveelheid van veranderen? (nummer): ";
pub const NEW_QUANTITY_PROMPT: &str = "Nieuwe hoeveelheid: ";
pub const CHANGE_PRICE_PROMPT: &str = "\nWelk product wil je de prijs van veranderen? (nummer): ";
pub const NEW_PRICE_PROMPT: &str = "Nieuwe prijs: (veelvoud van 0.10) \n> ";
pub const BACK_TO_MENU_PROMPT: &str = "\nDruk op enter om terug te gaan naar het menu...";

pub const INVALID_INPUT: &str = "Ongeldige invoer, terug naar menu.\n";
pub const INVALID_SELECTION: &str = "Ongeldige keuze, terug naar menu.\n";
pub const INVALID_PRICE: &str = "Ongeldige prijs, terug naar menu.\n";

/// `1. Melk: 10 beschikbaar`
pub fn stock_line(position: usize, drink: &Drink) -> String {
    format!("{}. {}: {} beschikbaar", position, drink.name(), drink.quantity())
}

/// `1. Melk: €2.50`
pub fn price_line(position: usize, drink: &Drink) -> String {
    format!("{}. {}: {}", position, drink.name(), drink.price())
}

pub fn drink_added(drink: &str) -> String {
    format!("{} is succesvol toegevoegd.\n", drink)
}

pub fn drink_removed(drink: &str) -> String {
    format!("{} is succesvol verwijderd.\n", drink)
}

pub fn quantity_changed(drink: &str, quantity: i64) -> String {
    format!("{} heeft nu {} stuks.\n", drink, quantity)
}

pub fn restocked(max: i64) -> String {
    format!("Alle producten zijn bijgevuld tot {} stuks.\n", max)
}

pub fn current_price(price: Money) -> String {
    format!("Huidige prijs: {}", price)
}

pub fn price_changed(drink: &str, price: Money) -> String {
    format!("{} heeft nu een prijs van {}\n", drink, price)
}

/// An action the operator asked for was refused; nothing changed.
pub fn rejected(err: &CoreError) -> String {
    format!("{}{}", INVALID_INPUT, err)
}

// =============================================================================
// Startup
// =============================================================================

pub fn startup_failed(err: &dyn std::fmt::Display) -> String {
    format!(
        "De automaat kon niet starten: {}\nProbeer het opnieuw door het programma opnieuw te starten.",
        err
    )
}
