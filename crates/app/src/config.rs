//! Environment-driven configuration.
//!
//! | variable | values | default |
//! |---|---|---|
//! | `STOREFRONT_CATALOG` | path to a JSON product array | built-in sample catalog |
//! | `STOREFRONT_CURRENCY_STYLE` | `symbol` (`₫`) / `alt` (`đ`) | `symbol` |
//! | `STOREFRONT_LOG_FORMAT` | `pretty` / `json` | `pretty` |

use std::path::PathBuf;

use thiserror::Error;

use storefront_catalog::{Catalog, CatalogError};
use storefront_core::Money;
use storefront_observability::LogFormat;

use crate::currency::{format_currency, format_currency_alt};

pub const CATALOG_VAR: &str = "STOREFRONT_CATALOG";
pub const CURRENCY_STYLE_VAR: &str = "STOREFRONT_CURRENCY_STYLE";
pub const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: expected {expected}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// How amounts are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CurrencyStyle {
    /// `15.000 ₫`
    #[default]
    Symbol,
    /// `15.000 đ`
    Alt,
}

impl CurrencyStyle {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "symbol" => Some(Self::Symbol),
            "alt" => Some(Self::Alt),
            _ => None,
        }
    }

    pub fn format(self, amount: Money) -> String {
        match self {
            Self::Symbol => format_currency(amount),
            Self::Alt => format_currency_alt(amount),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub catalog_path: Option<PathBuf>,
    pub currency_style: CurrencyStyle,
    pub log_format: LogFormat,
}

impl StorefrontConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup` (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_path = lookup(CATALOG_VAR)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        let currency_style = match lookup(CURRENCY_STYLE_VAR) {
            None => CurrencyStyle::default(),
            Some(raw) => CurrencyStyle::parse(&raw).ok_or(ConfigError::Invalid {
                var: CURRENCY_STYLE_VAR,
                value: raw,
                expected: "symbol or alt",
            })?,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            None => LogFormat::default(),
            Some(raw) => LogFormat::parse(&raw).ok_or(ConfigError::Invalid {
                var: LOG_FORMAT_VAR,
                value: raw,
                expected: "pretty or json",
            })?,
        };

        Ok(Self {
            catalog_path,
            currency_style,
            log_format,
        })
    }

    /// The configured catalog file, or the built-in sample catalog.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path),
            None => {
                tracing::info!("{CATALOG_VAR} not set; using built-in sample catalog");
                Ok(Catalog::sample())
            }
        }
    }
}
