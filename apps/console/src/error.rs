//! # App Error Type
//!
//! Errors that can end a console session.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CoreError (stock, keys, prices)                                        │
//! │     └── shown as a message, back to the menu; never ends the loop      │
//! │                                                                         │
//! │  AppError                                                               │
//! │     ├── Config      → startup fails, exit code 1                       │
//! │     ├── Core        → only while seeding stock at startup              │
//! │     ├── Io          → terminal broke, exit code 1                      │
//! │     └── InputClosed → stdin reached EOF, clean shutdown                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;
use vend_core::CoreError;

/// Errors surfaced by the console application.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input reached end-of-file; the session is over.
    #[error("Input closed")]
    InputClosed,

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Domain error outside the interactive loop (e.g. seeding stock).
    #[error("{0}")]
    Core(#[from] CoreError),
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_converts() {
        let err: AppError = CoreError::DuplicateDrink("Melk".to_string()).into();
        assert_eq!(err.to_string(), "Drink Melk already exists in the inventory");
    }

    #[test]
    fn test_config_error_message() {
        let err: AppError = ConfigError::InvalidValue("machine.maintenance_code".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for machine.maintenance_code"
        );
    }
}
