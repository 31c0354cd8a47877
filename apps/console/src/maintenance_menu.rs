//! # Maintenance Menu
//!
//! The operator sub-menu behind the hidden code.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Onderhoudsmenu:              │
//! │ 1. Voeg product toe          │──► add_drink
//! │ 2. Verwijder product         │──► remove_drink
//! │ 3. Verander hoeveelheid      │──► change_quantity
//! │ 4. Toon voorraad             │──► show_stock
//! │ 5. Vul alles bij             │──► restock_all
//! │ 6. Verander prijs            │──► change_price
//! │ 7. Sluit onderhoudsmenu      │──► back to selection
//! └──────────────────────────────┘
//! ```
//!
//! Every action returns to the menu. Bad input aborts the action without
//! touching the inventory.

use tracing::{debug, info};
use vend_core::validation::{parse_price, parse_quantity};
use vend_core::{Inventory, Maintenance, Money, NewDrink, MAX_STOCK};

use crate::console::Console;
use crate::error::AppResult;
use crate::input::{parse_position, MenuCommand};
use crate::text;

/// Runs the menu until the operator picks "7".
pub fn run(console: &mut dyn Console, inventory: &mut Inventory) -> AppResult<()> {
    info!("Maintenance menu opened");
    let mut maintenance = Maintenance::new(inventory);

    loop {
        for line in text::MAINTENANCE_MENU {
            console.write_line(line)?;
        }
        let choice = console.read_line(text::MENU_PROMPT)?;
        console.clear()?;

        let Some(command) = MenuCommand::parse(&choice) else {
            console.write_line(text::INVALID_CHOICE)?;
            continue;
        };
        debug!(?command, "Maintenance command");

        match command {
            MenuCommand::AddDrink => add_drink(console, &mut maintenance)?,
            MenuCommand::RemoveDrink => remove_drink(console, &mut maintenance)?,
            MenuCommand::ChangeQuantity => change_quantity(console, &mut maintenance)?,
            MenuCommand::ShowStock => show_stock(console, &maintenance)?,
            MenuCommand::RestockAll => {
                maintenance.restock_all();
                console.write_line(&text::restocked(MAX_STOCK))?;
            }
            MenuCommand::ChangePrice => change_price(console, &mut maintenance)?,
            MenuCommand::Close => break,
        }
    }

    info!("Maintenance menu closed");
    Ok(())
}

fn display_inventory(console: &mut dyn Console, maintenance: &Maintenance<'_>) -> AppResult<()> {
    for (position, drink) in maintenance.inventory().positions() {
        console.write_line(&text::stock_line(position, drink))?;
    }
    Ok(())
}

fn display_prices(console: &mut dyn Console, maintenance: &Maintenance<'_>) -> AppResult<()> {
    for (position, drink) in maintenance.inventory().positions() {
        console.write_line(&text::price_line(position, drink))?;
    }
    Ok(())
}

fn add_drink(console: &mut dyn Console, maintenance: &mut Maintenance<'_>) -> AppResult<()> {
    let brand = console.read_line(text::BRAND_PROMPT)?;
    let subtype = console.read_line(text::SUBTYPE_PROMPT)?;

    let Ok(price) = parse_price(&console.read_line(text::PRICE_PROMPT)?) else {
        return console.write_line(text::INVALID_INPUT);
    };
    let Ok(quantity) = parse_quantity(&console.read_line(text::QUANTITY_PROMPT)?) else {
        return console.write_line(text::INVALID_INPUT);
    };

    let new = NewDrink {
        brand,
        subtype,
        price,
        quantity,
    };
    match maintenance.add_drink(new) {
        Ok(drink) => {
            let name = drink.name();
            console.write_line(&text::drink_added(&name))
        }
        Err(err) => console.write_line(&text::rejected(&err)),
    }
}

fn remove_drink(console: &mut dyn Console, maintenance: &mut Maintenance<'_>) -> AppResult<()> {
    display_inventory(console, maintenance)?;

    let Some(position) = parse_position(&console.read_line(text::REMOVE_PROMPT)?) else {
        return console.write_line(text::INVALID_INPUT);
    };

    match maintenance.remove_at(position) {
        Some(drink) => console.write_line(&text::drink_removed(&drink.name())),
        None => console.write_line(text::INVALID_SELECTION),
    }
}

fn change_quantity(console: &mut dyn Console, maintenance: &mut Maintenance<'_>) -> AppResult<()> {
    display_inventory(console, maintenance)?;

    let Some(position) = parse_position(&console.read_line(text::CHANGE_QUANTITY_PROMPT)?) else {
        return console.write_line(text::INVALID_INPUT);
    };
    if maintenance.inventory().get_position(position).is_none() {
        return console.write_line(text::INVALID_SELECTION);
    }

    let Ok(quantity) = parse_quantity(&console.read_line(text::NEW_QUANTITY_PROMPT)?) else {
        return console.write_line(text::INVALID_INPUT);
    };

    match maintenance.change_quantity(position, quantity) {
        Ok(drink) => {
            let line = text::quantity_changed(&drink.name(), drink.quantity());
            console.write_line(&line)
        }
        Err(err) => console.write_line(&text::rejected(&err)),
    }
}

fn show_stock(console: &mut dyn Console, maintenance: &Maintenance<'_>) -> AppResult<()> {
    display_inventory(console, maintenance)?;
    console.read_line(text::BACK_TO_MENU_PROMPT)?;
    console.clear()
}

fn change_price(console: &mut dyn Console, maintenance: &mut Maintenance<'_>) -> AppResult<()> {
    display_prices(console, maintenance)?;

    let Some(position) = parse_position(&console.read_line(text::CHANGE_PRICE_PROMPT)?) else {
        return console.write_line(text::INVALID_INPUT);
    };
    let Some(current) = maintenance.inventory().get_position(position).map(|d| d.price()) else {
        return console.write_line(text::INVALID_SELECTION);
    };

    console.write_line(&text::current_price(current))?;
    let Ok(price) = console.read_line(text::NEW_PRICE_PROMPT)?.parse::<Money>() else {
        return console.write_line(text::INVALID_INPUT);
    };

    match maintenance.change_price(position, price) {
        Ok(drink) => {
            let line = text::price_changed(&drink.name(), drink.price());
            console.write_line(&line)
        }
        Err(_) => console.write_line(text::INVALID_PRICE),
    }
}
