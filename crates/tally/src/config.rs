//! User preferences stored next to the ledger.
//!
//! On native this is `config.yaml` in the data directory:
//!
//! ```yaml
//! currency_symbol: "$"
//! income_placeholder: Paycheck
//! ```
//!
//! Every key is optional; missing keys fall back to the defaults.

use serde::{Deserialize, Serialize};
use tally_core::format::DEFAULT_CURRENCY_SYMBOL;
use tally_core::{DEFAULT_INCOME_DESCRIPTION, ViewOptions};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for every money amount on screen
    pub currency_symbol: String,
    /// Description stored for income saved without one
    pub income_placeholder: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            income_placeholder: DEFAULT_INCOME_DESCRIPTION.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            currency_symbol: self.currency_symbol.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml("currency_symbol: \"$\"\n").unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.income_placeholder, DEFAULT_INCOME_DESCRIPTION);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = AppConfig {
            currency_symbol: "€".to_string(),
            income_placeholder: "Paycheck".to_string(),
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        assert_eq!(AppConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_view_options_use_symbol() {
        let config = AppConfig {
            currency_symbol: "$".to_string(),
            ..Default::default()
        };
        assert_eq!(config.view_options().currency_symbol, "$");
    }
}
