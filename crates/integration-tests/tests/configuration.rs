//! Configuration and catalog files.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde_json::json;
use vedic_hearth_core::{CurrencyCode, ProductId};
use vedic_hearth_integration_tests::temp_path;
use vedic_hearth_storefront::catalog::CatalogError;
use vedic_hearth_storefront::checkout::OrderSummary;
use vedic_hearth_storefront::config::StorefrontConfig;
use vedic_hearth_storefront::state::{Command, StoreState};

fn config_from(pairs: &[(&str, String)]) -> StorefrontConfig {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), v.clone()))
        .collect();
    StorefrontConfig::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

#[test]
fn test_configured_catalog_and_policy_drive_checkout() {
    let path = temp_path("json");
    let catalog_json = json!([
        {
            "id": "lamp",
            "name": "Brass Lamp",
            "description": "Hand-polished brass diya",
            "price": "450.50",
            "category": "Cow Dung Crafts",
            "in_stock": true
        }
    ]);
    std::fs::write(&path, catalog_json.to_string()).unwrap();

    let config = config_from(&[
        ("STOREFRONT_CATALOG_PATH", path.display().to_string()),
        ("STOREFRONT_DEFAULT_CURRENCY", "EUR".to_owned()),
        ("STOREFRONT_FREE_SHIPPING_THRESHOLD", "900".to_owned()),
        ("STOREFRONT_SHIPPING_FEE", "40".to_owned()),
    ]);
    let catalog = config.load_catalog();
    std::fs::remove_file(&path).unwrap();
    let catalog = catalog.unwrap();
    assert_eq!(catalog.len(), 1);

    let lamp = catalog.get(&ProductId::new("lamp")).unwrap();
    let state = StoreState::with_preferences(config.preferences())
        .apply(&Command::AddToCart(lamp.clone()));
    assert_eq!(state.currency(), CurrencyCode::EUR);

    let summary = OrderSummary::compute(state.cart(), None, state.currency(), &config.shipping);
    assert_eq!(summary.shipping, Decimal::from(40));
    assert_eq!(summary.format(summary.total), "€490.5");

    let state = state.apply(&Command::AddToCart(lamp.clone()));
    let summary = OrderSummary::compute(state.cart(), None, state.currency(), &config.shipping);
    assert!(summary.ships_free());
    assert_eq!(summary.format(summary.total), "€901");
}

#[test]
fn test_invalid_catalog_file_is_rejected() {
    let path = temp_path("json");
    std::fs::write(
        &path,
        json!([
            {"id": "a", "name": "A", "description": "", "price": 10, "category": "Soaps", "in_stock": true},
            {"id": "a", "name": "B", "description": "", "price": 20, "category": "Soaps", "in_stock": true}
        ])
        .to_string(),
    )
    .unwrap();

    let config = config_from(&[("STOREFRONT_CATALOG_PATH", path.display().to_string())]);
    let result = config.load_catalog();
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id.as_str() == "a"));
}

#[test]
fn test_defaults_use_seed_catalog() {
    let config = config_from(&[]);
    assert_eq!(config.load_catalog().unwrap().len(), 8);
    assert_eq!(config.preferences().currency, CurrencyCode::INR);
}
