//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STOREFRONT_DEFAULT_CURRENCY` - Initial display currency (default: INR)
//! - `STOREFRONT_DEFAULT_LANGUAGE` - Initial language code (default: EN)
//! - `STOREFRONT_CATALOG_PATH` - Catalog JSON file (default: embedded seed)
//! - `STOREFRONT_FREE_SHIPPING_THRESHOLD` - Subtotal for free shipping (default: 5000)
//! - `STOREFRONT_SHIPPING_FEE` - Shipping fee below the threshold (default: 299)

use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;
use vedic_hearth_core::{CurrencyCode, LanguageCode};

use crate::catalog::{Catalog, CatalogError};
use crate::checkout::{DEFAULT_FREE_SHIPPING_THRESHOLD, DEFAULT_SHIPPING_FEE, ShippingPolicy};
use crate::state::Preferences;

const CURRENCY_VAR: &str = "STOREFRONT_DEFAULT_CURRENCY";
const LANGUAGE_VAR: &str = "STOREFRONT_DEFAULT_LANGUAGE";
const CATALOG_PATH_VAR: &str = "STOREFRONT_CATALOG_PATH";
const THRESHOLD_VAR: &str = "STOREFRONT_FREE_SHIPPING_THRESHOLD";
const SHIPPING_FEE_VAR: &str = "STOREFRONT_SHIPPING_FEE";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Currency shown to new shoppers
    pub default_currency: CurrencyCode,
    /// Language code shown to new shoppers
    pub default_language: LanguageCode,
    /// Catalog file; `None` uses the embedded seed catalog
    pub catalog_path: Option<PathBuf>,
    /// Shipping rules applied at checkout
    pub shipping: ShippingPolicy,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set to a value
    /// that cannot be used.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`StorefrontConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let vars = Vars(lookup);

        let default_currency = match vars.optional(CURRENCY_VAR) {
            Some(code) => code
                .parse::<CurrencyCode>()
                .map_err(|e| invalid(CURRENCY_VAR, e))?,
            None => CurrencyCode::default(),
        };

        let default_language = match vars.optional(LANGUAGE_VAR) {
            Some(code) => LanguageCode::parse(&code)
                .ok_or_else(|| invalid(LANGUAGE_VAR, "language code is blank"))?,
            None => LanguageCode::default(),
        };

        let catalog_path = vars
            .optional(CATALOG_PATH_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let shipping = ShippingPolicy {
            free_shipping_threshold: vars
                .amount_or_default(THRESHOLD_VAR, DEFAULT_FREE_SHIPPING_THRESHOLD)?,
            shipping_fee: vars.amount_or_default(SHIPPING_FEE_VAR, DEFAULT_SHIPPING_FEE)?,
        };

        let config = Self {
            default_currency,
            default_language,
            catalog_path,
            shipping,
        };
        tracing::debug!(?config, "Storefront configuration loaded");
        Ok(config)
    }

    /// Initial display preferences for a new shopper.
    #[must_use]
    pub fn preferences(&self) -> Preferences {
        Preferences {
            currency: self.default_currency,
            language: self.default_language.clone(),
        }
    }

    /// Load the configured catalog, or the embedded seed.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be read or is invalid.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        self.catalog_path
            .as_deref()
            .map_or_else(Catalog::seed, Catalog::load)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

struct Vars<F>(F);

impl<F: Fn(&str) -> Option<String>> Vars<F> {
    /// Get an optional variable, treating blank values as unset.
    fn optional(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.trim().is_empty())
    }

    /// Get a non-negative amount with a default value.
    fn amount_or_default(&self, key: &str, default: Decimal) -> Result<Decimal, ConfigError> {
        let Some(raw) = self.optional(key) else {
            return Ok(default);
        };
        let amount = raw
            .trim()
            .parse::<Decimal>()
            .map_err(|e| invalid(key, e))?;
        if amount.is_sign_negative() {
            return Err(invalid(key, "amount must not be negative"));
        }
        Ok(amount)
    }
}

fn invalid(key: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), reason.to_string())
}
