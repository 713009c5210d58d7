//! Unified error handling.
//!
//! Provides a unified `AppError` type for the fallible edges of the
//! storefront: configuration, catalog loading, coupon entry and forms.

use thiserror::Error;
use vedic_hearth_core::{EmailError, ProductId};

use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::services::auth::AuthError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Coupon entry failed.
    #[error("{0}")]
    Checkout(#[from] CheckoutError),

    /// Sign-in or sign-up form was rejected.
    #[error("{0}")]
    Auth(#[from] AuthError),

    /// Email address failed to parse.
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    /// Product is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Bad input from the caller.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Returns true if the error was caused by user input rather than the
    /// storefront's own setup.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        !matches!(self, Self::Config(_) | Self::Catalog(_))
    }
}

/// Result type alias for storefront operations.
pub type Result<T, E = AppError> = std::result::Result<T, E>;
