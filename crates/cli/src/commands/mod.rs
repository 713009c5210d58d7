//! Subcommand implementations.
//!
//! Each command writes its report to the given writer so it can be
//! exercised against an in-memory buffer.

pub mod account;
pub mod cart;
pub mod products;
pub mod validate;

use thiserror::Error;
use vedic_hearth_core::CurrencyCode;
use vedic_hearth_storefront::AppError;
use vedic_hearth_storefront::catalog::Catalog;
use vedic_hearth_storefront::config::StorefrontConfig;
use vedic_hearth_storefront::state::{Command, StoreState};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Storefront operation failed.
    #[error(transparent)]
    App(#[from] AppError),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration and catalog shared by the commands.
pub struct Context {
    pub config: StorefrontConfig,
    pub catalog: Catalog,
}

impl Context {
    /// Load configuration from the environment and the configured catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the catalog cannot
    /// be loaded.
    pub fn load() -> Result<Self, CliError> {
        let config = StorefrontConfig::from_env().map_err(AppError::from)?;
        let catalog = config.load_catalog().map_err(AppError::from)?;
        Ok(Self { config, catalog })
    }

    /// A fresh guest state using the configured preferences, optionally
    /// switched to another display currency.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` for an unsupported currency code.
    pub fn initial_state(&self, currency: Option<&str>) -> Result<StoreState, CliError> {
        let state = StoreState::with_preferences(self.config.preferences());
        let Some(code) = currency else {
            return Ok(state);
        };
        let currency: CurrencyCode = code.parse().map_err(AppError::BadRequest)?;
        Ok(state.apply(&Command::SetCurrency(currency.code().to_owned())))
    }
}
