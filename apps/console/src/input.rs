//! Tagged user input.
//!
//! Raw lines are turned into these enums once, so the flow code matches on
//! variants instead of comparing strings.

use vend_core::Coin;

/// What was typed at the product selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionInput {
    /// A number; not yet checked against the catalog size.
    Choice(usize),
    /// The hidden maintenance code.
    MaintenanceEntry,
    Invalid,
}

impl SelectionInput {
    pub fn parse(line: &str, maintenance_code: &str) -> Self {
        if line == maintenance_code {
            return SelectionInput::MaintenanceEntry;
        }
        match line.trim().parse::<usize>() {
            Ok(choice) => SelectionInput::Choice(choice),
            Err(_) => SelectionInput::Invalid,
        }
    }
}

/// What was typed at the coin prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinInput {
    Coin(Coin),
    /// `0`: stop paying and get the money back.
    Cancel,
    Invalid,
}

impl CoinInput {
    pub fn parse(line: &str) -> Self {
        match line.trim().parse::<usize>() {
            Ok(0) => CoinInput::Cancel,
            Ok(choice) => Coin::from_choice(choice)
                .map(CoinInput::Coin)
                .unwrap_or(CoinInput::Invalid),
            Err(_) => CoinInput::Invalid,
        }
    }
}

/// Maintenance menu entries, numbered 1 to 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddDrink,
    RemoveDrink,
    ChangeQuantity,
    ShowStock,
    RestockAll,
    ChangePrice,
    Close,
}

impl MenuCommand {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(MenuCommand::AddDrink),
            "2" => Some(MenuCommand::RemoveDrink),
            "3" => Some(MenuCommand::ChangeQuantity),
            "4" => Some(MenuCommand::ShowStock),
            "5" => Some(MenuCommand::RestockAll),
            "6" => Some(MenuCommand::ChangePrice),
            "7" => Some(MenuCommand::Close),
            _ => None,
        }
    }
}

/// A 1-based list position, or `None` if the line is not a number.
pub fn parse_position(line: &str) -> Option<usize> {
    line.trim().parse().ok()
}
