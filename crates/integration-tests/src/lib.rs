//! Integration tests for Vedic Hearth.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vedic-hearth-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shopping_flow` - Browse, cart, checkout and sign-in end to end
//! - `catalog_browsing` - Filters, sorting and currency over the seed catalog
//! - `forms` - Checkout and account form validation
//! - `configuration` - Environment configuration and catalog files
//!
//! This crate only holds shared helpers; the tests live in `tests/`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;

use vedic_hearth_core::ProductId;
use vedic_hearth_storefront::catalog::{Catalog, Product};
use vedic_hearth_storefront::state::{Command, StoreState};

/// The seed catalog.
///
/// # Panics
///
/// Panics if the embedded seed catalog is malformed.
#[must_use]
pub fn seed_catalog() -> Catalog {
    Catalog::seed().expect("seed catalog should load")
}

/// Look up a product that must exist.
///
/// # Panics
///
/// Panics if `id` is not in the catalog.
#[must_use]
pub fn product(catalog: &Catalog, id: &str) -> Arc<Product> {
    let id = ProductId::new(id);
    Arc::clone(
        catalog
            .get(&id)
            .unwrap_or_else(|| panic!("product {id} should exist")),
    )
}

/// Apply commands in order.
#[must_use]
pub fn apply_all(state: StoreState, commands: &[Command]) -> StoreState {
    commands.iter().fold(state, |state, command| state.apply(command))
}

/// A unique path in the system temp directory.
#[must_use]
pub fn temp_path(extension: &str) -> PathBuf {
    std::env::temp_dir().join(format!("vedic-hearth-{}.{extension}", uuid::Uuid::new_v4()))
}
