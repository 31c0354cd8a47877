//! # Vending Console Library
//!
//! Terminal front end for the drink vending machine. The binary in
//! `main.rs` only calls [`run`].
//!
//! ## Module Organization
//! ```text
//! vend_console/
//! ├── lib.rs               ◄─── You are here (startup & logging)
//! ├── config.rs            ◄─── machine.toml + VEND_* overrides
//! ├── console.rs           ◄─── Console trait, stdin/stdout terminal
//! ├── input.rs             ◄─── Typed parsing of entered lines
//! ├── machine.rs           ◄─── Select → pay → change → dispense
//! ├── maintenance_menu.rs  ◄─── Operator menu behind the hidden code
//! ├── text.rs              ◄─── Every string shown to the user
//! └── error.rs             ◄─── AppError / ConfigError
//! ```
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  init_tracing ──► MachineConfig::load ──► setup_stock ──► start        │
//! │   (stderr)         (file, env, validate)   (seed drinks)   (loop until  │
//! │                                                              EOF)       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod machine;
pub mod maintenance_menu;
pub mod text;

#[cfg(test)]
mod test_support;

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::MachineConfig;
use console::Terminal;
use error::AppResult;
use machine::VendingMachine;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "VEND_CONFIG";

/// Loads configuration, stocks the machine, and serves customers on the
/// terminal until input is closed.
pub fn run() -> AppResult<()> {
    init_tracing();

    let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = MachineConfig::load(config_path)?;
    info!(drinks = config.stock.len(), "Configuration loaded");

    let mut machine = VendingMachine::new(config.machine.maintenance_code.clone());
    machine.setup_stock(&config.stock)?;

    let mut terminal = Terminal::stdio(&config.machine);
    machine.start(&mut terminal)
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so they never mix with the customer screen.
///
/// ## Log Levels
/// - `RUST_LOG=info` - Show purchases and maintenance actions
/// - `RUST_LOG=vend_core=debug` - Stock changes
/// - Default: WARN level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
