//! Demo configuration loaded from TOML.
//!
//! Every section is optional. An empty file (or no file at all) yields the
//! built-in demo: three customers paying by credit card, PayPal and bank
//! transfer.

use crate::error::ConfigError;
use crate::strategy::{Item, PaymentMethod};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
    pub carts: Carts,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        parse_level(&self.level)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CartConfig {
    pub customer: String,
    pub payment: PaymentMethod,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Newtype so that a missing `[[carts]]` table falls back to the built-in
/// carts while an explicit empty list stays empty.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Carts(pub Vec<CartConfig>);

impl Default for Carts {
    fn default() -> Self {
        Self(vec![
            CartConfig {
                customer: "customer1".to_string(),
                payment: PaymentMethod::CreditCard,
                items: vec![Item::new("Laptop", 1200), Item::new("Mouse", 20)],
            },
            CartConfig {
                customer: "customer2".to_string(),
                payment: PaymentMethod::PayPal,
                items: vec![Item::new("Smartphone", 800)],
            },
            CartConfig {
                customer: "customer3".to_string(),
                payment: PaymentMethod::BankTransfer,
                items: vec![Item::new("Headphones", 50), Item::new("Backpack", 40)],
            },
        ])
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        // Reject bad levels at load time rather than when logging starts.
        config.logging.level_filter()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

pub fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    match level.to_ascii_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        "off" => Ok(LevelFilter::OFF),
        _ => Err(ConfigError::InvalidLogLevel {
            level: level.to_string(),
        }),
    }
}
