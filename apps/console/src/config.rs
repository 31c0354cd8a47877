//! # Machine Configuration
//!
//! Settings and initial stock for one machine.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     VEND_MAINTENANCE_CODE=geheim                                       │
//! │     VEND_PACING=off                                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $VEND_CONFIG, or                                                   │
//! │     ~/.config/vending-machine/machine.toml (Linux)                     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     code "adminadmin", five starter drinks                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [machine]
//! maintenance_code = "adminadmin"
//! clear_screen = true
//! pacing = true
//!
//! [[stock]]
//! brand = "Bier"
//! subtype = "Alcoholvrij"
//! price_cents = 950
//! quantity = 3
//! ```
//!
//! A `[[stock]]` list replaces the default starter stock entirely.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use vend_core::{CoreResult, Drink, Money, NewDrink};

use crate::error::ConfigError;

// =============================================================================
// Machine Settings
// =============================================================================

/// Behaviour of the console front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSettings {
    /// Text that opens the maintenance menu when typed at the selection
    /// prompt.
    #[serde(default = "default_maintenance_code")]
    pub maintenance_code: String,

    /// Clear the terminal between screens.
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    /// Pause during dispensing and change return, like a real machine.
    #[serde(default = "default_true")]
    pub pacing: bool,
}

fn default_maintenance_code() -> String {
    "adminadmin".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for MachineSettings {
    fn default() -> Self {
        MachineSettings {
            maintenance_code: default_maintenance_code(),
            clear_screen: true,
            pacing: true,
        }
    }
}

// =============================================================================
// Stock Entries
// =============================================================================

/// One drink loaded into the machine at startup.
///
/// Seeded drinks follow the same rules as a drink added from the
/// maintenance menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    pub brand: String,

    #[serde(default)]
    pub subtype: String,

    /// Price in cents in the file (250 = €2.50).
    #[serde(rename = "price_cents")]
    pub price: Money,

    pub quantity: i64,
}

impl StockEntry {
    pub fn new(brand: &str, subtype: &str, price: Money, quantity: i64) -> Self {
        StockEntry {
            brand: brand.to_string(),
            subtype: subtype.to_string(),
            price,
            quantity,
        }
    }

    pub fn to_drink(&self) -> CoreResult<Drink> {
        NewDrink {
            brand: self.brand.clone(),
            subtype: self.subtype.clone(),
            price: self.price,
            quantity: self.quantity,
        }
        .into_drink()
    }
}

/// The starter stock every machine ships with.
pub fn default_stock() -> Vec<StockEntry> {
    vec![
        StockEntry::new("Melk", "", Money::from_cents(250), 10),
        StockEntry::new("Bier", "", Money::from_cents(100), 5),
        StockEntry::new("Bier", "Alcoholvrij", Money::from_cents(950), 3),
        StockEntry::new("Karnemelk", "", Money::from_cents(150), 7),
        StockEntry::new("Karnemelk", "met prik", Money::from_cents(180), 1),
    ]
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete machine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    #[serde(default)]
    pub machine: MachineSettings,

    #[serde(default = "default_stock")]
    pub stock: Vec<StockEntry>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            machine: MachineSettings::default(),
            stock: default_stock(),
        }
    }
}

impl MachineConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (machine.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading machine config from file");
                let contents = std::fs::read_to_string(&path).map_err(|source| {
                    ConfigError::Read {
                        path: path.clone(),
                        source,
                    }
                })?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;

        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Checks the settings and every stock entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let code = &self.machine.maintenance_code;
        if code.is_empty() || code.trim() != code {
            return Err(ConfigError::InvalidValue(
                "machine.maintenance_code (empty or padded with whitespace)".into(),
            ));
        }
        // A numeric code would be read as a product choice.
        if code.parse::<i64>().is_ok() {
            return Err(ConfigError::InvalidValue(
                "machine.maintenance_code (must not be a number)".into(),
            ));
        }

        for entry in &self.stock {
            entry.to_drink().map_err(|err| {
                ConfigError::InvalidValue(format!(
                    "stock entry '{} {}': {}",
                    entry.brand, entry.subtype, err
                ))
            })?;
        }

        Ok(())
    }

    /// Applies `VEND_*` overrides read through `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(code) = lookup("VEND_MAINTENANCE_CODE") {
            debug!("Overriding maintenance code from environment");
            self.machine.maintenance_code = code;
        }

        if let Some(value) = lookup("VEND_CLEAR_SCREEN") {
            match parse_switch(&value) {
                Some(enabled) => self.machine.clear_screen = enabled,
                None => warn!(value = %value, "Unknown VEND_CLEAR_SCREEN value in environment"),
            }
        }

        if let Some(value) = lookup("VEND_PACING") {
            match parse_switch(&value) {
                Some(enabled) => {
                    debug!(enabled, "Overriding pacing from environment");
                    self.machine.pacing = enabled;
                }
                None => warn!(value = %value, "Unknown VEND_PACING value in environment"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("nl", "vending", "vending-machine")
            .map(|dirs| dirs.config_dir().join("machine.toml"))
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "aan" => Some(true),
        "0" | "false" | "no" | "off" | "uit" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = MachineConfig::default();
        assert_eq!(config.machine.maintenance_code, "adminadmin");
        assert!(config.machine.pacing);
        assert_eq!(config.stock.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = MachineConfig::from_toml("[machine]\npacing = false\n").unwrap();
        assert!(!config.machine.pacing);
        assert!(config.machine.clear_screen);
        assert_eq!(config.machine.maintenance_code, "adminadmin");
        assert_eq!(config.stock, default_stock());
    }

    #[test]
    fn test_stock_list_replaces_defaults() {
        let toml = r#"
            [[stock]]
            brand = "Cola"
            price_cents = 200
            quantity = 4
        "#;
        let config = MachineConfig::from_toml(toml).unwrap();
        assert_eq!(config.stock, vec![StockEntry::new("Cola", "", Money::from_cents(200), 4)]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            MachineConfig::from_toml("[machine\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = MachineConfig::default();
        config.machine.maintenance_code = "1234".to_string();
        assert!(config.validate().is_err());

        config.machine.maintenance_code = " admin".to_string();
        assert!(config.validate().is_err());

        config.machine.maintenance_code = "admin".to_string();
        config.stock.push(StockEntry::new("Cola", "", Money::from_cents(105), 1));
        assert!(config.validate().is_err());

        config.stock.pop();
        config.stock.push(StockEntry::new("Cola", "", Money::from_cents(100), 12));
        assert!(config.validate().is_err());

        config.stock.pop();
        config.stock.push(StockEntry::new("  ", "", Money::from_cents(100), 1));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(message)) if message.contains("brand")
        ));
    }

    #[test]
    fn test_stock_price_reads_cents() {
        let toml = r#"
            [[stock]]
            brand = "Karnemelk"
            subtype = "met prik"
            price_cents = 180
            quantity = 1
        "#;
        let config = MachineConfig::from_toml(toml).unwrap();
        assert_eq!(config.stock[0].price, Money::from_cents(180));
        assert_eq!(config.stock[0].to_drink().unwrap().name(), "Karnemelk met prik");

        let written = toml::to_string_pretty(&config).unwrap();
        assert!(written.contains("price_cents = 180"));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("VEND_MAINTENANCE_CODE", "geheim"),
            ("VEND_PACING", "off"),
            ("VEND_CLEAR_SCREEN", "misschien"),
        ]
        .into_iter()
        .collect();

        let mut config = MachineConfig::default();
        config.apply_overrides(|name| env.get(name).map(|value| value.to_string()));

        assert_eq!(config.machine.maintenance_code, "geheim");
        assert!(!config.machine.pacing);
        assert!(config.machine.clear_screen);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("vend-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[machine]\nclear_screen = false\n").unwrap();

        let config = MachineConfig::load(Some(path.clone())).unwrap();
        assert!(!config.machine.clear_screen);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&MachineConfig::default()).unwrap();
        assert!(toml_str.contains("[machine]"));
        assert!(toml_str.contains("[[stock]]"));
    }
}
