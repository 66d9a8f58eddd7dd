//! Adapter configuration
//!
//! JSON-backed, with every field optional:
//! - `public_trade_sort`: sort tag attached to the public trade tape
//! - `known_currencies`: allow-list of currency codes (empty accepts all)

use ferrox_core::{Currency, TradeSortType};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::error::{AdapterError, AdapterResult};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    pub public_trade_sort: TradeSortType,
    pub known_currencies: Vec<String>,
}

impl AdapterConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the embedded default configuration
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_json(include_str!("adapter_config.json"))
    }

    /// Normalize a currency code, enforcing the allow-list when one is set
    pub fn resolve_currency(&self, code: &str) -> AdapterResult<Currency> {
        let currency = Currency::new(code);
        if self.known_currencies.is_empty()
            || self
                .known_currencies
                .iter()
                .any(|known| Currency::new(known) == currency)
        {
            Ok(currency)
        } else {
            Err(AdapterError::UnknownCurrency(currency.code().to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = AdapterConfig::load_default().unwrap();
        assert_eq!(config, AdapterConfig::default());
        assert_eq!(config.public_trade_sort, TradeSortType::SortById);
    }

    #[test]
    fn test_partial_config() {
        let config = AdapterConfig::from_json(r#"{"public_trade_sort":"SortByTimestamp"}"#).unwrap();
        assert_eq!(config.public_trade_sort, TradeSortType::SortByTimestamp);
        assert!(config.known_currencies.is_empty());
    }

    #[test]
    fn test_invalid_config() {
        let result = AdapterConfig::from_json(r#"{"public_trade_sort":"Random"}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = AdapterConfig::from_file("/nonexistent/adapter_config.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_resolve_currency() {
        let open = AdapterConfig::default();
        assert_eq!(open.resolve_currency("doge").unwrap(), Currency::new("DOGE"));

        let restricted = AdapterConfig {
            known_currencies: vec!["btc".to_string(), "EUR".to_string()],
            ..Default::default()
        };
        assert_eq!(restricted.resolve_currency("BTC").unwrap(), Currency::new("BTC"));
        assert_eq!(restricted.resolve_currency("eur").unwrap(), Currency::new("EUR"));
        assert_eq!(
            restricted.resolve_currency("doge"),
            Err(AdapterError::UnknownCurrency("DOGE".to_string()))
        );
    }
}
