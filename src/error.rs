use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = PatternError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Observer '{name}' is not attached to this subject")]
    ObserverNotFound { name: String },

    #[error("Observer '{observer}' failed to handle update: {reason}")]
    ObserverFailed { observer: String, reason: String },

    #[error("Coffee cost overflowed while adding '{topping}'")]
    CostOverflow { topping: String },

    #[error("Cart total overflowed while adding '{item}'")]
    PriceOverflow { item: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to write demo output: {0}")]
    Io(#[from] io::Error),
}

impl PatternError {
    pub fn observer_not_found(name: impl Into<String>) -> Self {
        Self::ObserverNotFound { name: name.into() }
    }

    pub fn observer_failed(observer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ObserverFailed {
            observer: observer.into(),
            reason: reason.into(),
        }
    }

    pub fn cost_overflow(topping: impl Into<String>) -> Self {
        Self::CostOverflow {
            topping: topping.into(),
        }
    }

    pub fn price_overflow(item: impl Into<String>) -> Self {
        Self::PriceOverflow { item: item.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid log level '{level}' (expected one of: trace, debug, info, warn, error, off)")]
    InvalidLogLevel { level: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observer_not_found_message() {
        let err = PatternError::observer_not_found("Observer 1");
        assert_eq!(
            err.to_string(),
            "Observer 'Observer 1' is not attached to this subject"
        );
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: PatternError = ConfigError::InvalidLogLevel {
            level: "loud".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("Invalid log level 'loud'"));
    }
}
