//! Derived catalog views.
//!
//! Everything here is a pure function of the static catalog, the current
//! [`StoreState`] snapshot and the transient [`CatalogFilters`]; views are
//! recomputed after every state transition.

mod filters;
mod summary;

pub use filters::{ALL, CatalogFilters, CategoryFilter, PriceBucket, SortKey};
pub use summary::CartSummary;

use std::sync::Arc;

use vedic_hearth_core::CurrencyCode;

use crate::catalog::{Catalog, Product};
use crate::state::StoreState;

/// A product as shown on a listing card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub product: Arc<Product>,
    /// Unit price in the selected currency.
    pub price: String,
    /// Struck-through original price, when marked down.
    pub original_price: Option<String>,
    /// "Save" amount, when marked down.
    pub savings: Option<String>,
    pub in_wishlist: bool,
    /// Units of this product already in the cart.
    pub cart_quantity: u32,
    /// False for out-of-stock products.
    pub can_add_to_cart: bool,
}

impl ProductCard {
    /// Project a product for display against the current state.
    #[must_use]
    pub fn new(product: &Arc<Product>, state: &StoreState) -> Self {
        let currency = state.currency();
        let format = |amount| vedic_hearth_core::Price::new(amount, currency).display();
        let marked_down = product.savings().is_some();

        Self {
            product: Arc::clone(product),
            price: format(product.price),
            original_price: product.original_price.filter(|_| marked_down).map(format),
            savings: product.savings().map(format),
            in_wishlist: state.is_in_wishlist(&product.id),
            cart_quantity: state.cart_quantity(&product.id),
            can_add_to_cart: product.in_stock,
        }
    }
}

/// The product page view: visible products plus cart totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub products: Vec<ProductCard>,
    pub cart: CartSummary,
}

impl CatalogView {
    /// Currency the view was rendered in.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.cart.currency
    }
}

/// Derive the product list and cart summary for the current state.
#[must_use]
pub fn derive(catalog: &Catalog, state: &StoreState, filters: &CatalogFilters) -> CatalogView {
    let products = filters
        .apply(catalog.products())
        .iter()
        .map(|product| ProductCard::new(product, state))
        .collect();

    CatalogView {
        products,
        cart: CartSummary::from_lines(state.cart(), state.currency()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use vedic_hearth_core::ProductId;

    use super::*;
    use crate::state::Command;

    fn seed_product(catalog: &Catalog, id: &str) -> Arc<Product> {
        Arc::clone(catalog.get(&ProductId::new(id)).unwrap())
    }

    #[test]
    fn test_derive_marks_wishlist_and_cart() {
        let catalog = Catalog::seed().unwrap();
        let state = StoreState::default()
            .apply(&Command::AddToCart(seed_product(&catalog, "1")))
            .apply(&Command::AddToWishlist(seed_product(&catalog, "2")));

        let view = derive(&catalog, &state, &CatalogFilters::default());
        assert_eq!(view.products.len(), catalog.len());

        let ghee = view.products.iter().find(|c| c.product.id.as_str() == "1").unwrap();
        assert_eq!(ghee.cart_quantity, 1);
        assert!(!ghee.in_wishlist);

        let diyas = view.products.iter().find(|c| c.product.id.as_str() == "2").unwrap();
        assert!(diyas.in_wishlist);
        assert_eq!(diyas.cart_quantity, 0);

        assert_eq!(view.cart.item_count, 1);
        assert_eq!(view.cart.subtotal, Decimal::from(899));
    }

    #[test]
    fn test_product_card_markdown_and_stock() {
        let catalog = Catalog::seed().unwrap();
        let state = StoreState::default().apply(&Command::SetCurrency("USD".to_owned()));

        let card = ProductCard::new(&seed_product(&catalog, "4"), &state);
        assert_eq!(card.price, "$2,499");
        assert_eq!(card.original_price.as_deref(), Some("$2,799"));
        assert_eq!(card.savings.as_deref(), Some("$300"));
        assert!(card.can_add_to_cart);

        let card = ProductCard::new(&seed_product(&catalog, "5"), &state);
        assert_eq!(card.original_price, None);
        assert!(!card.can_add_to_cart);
    }

    #[test]
    fn test_derive_respects_filters_and_currency() {
        let catalog = Catalog::seed().unwrap();
        let state = StoreState::default().apply(&Command::SetCurrency("EUR".to_owned()));
        let filters = CatalogFilters::from_params("soaps", "", "all", "price-high");

        let view = derive(&catalog, &state, &filters);
        let prices: Vec<&str> = view.products.iter().map(|c| c.price.as_str()).collect();
        assert_eq!(prices, vec!["€399", "€100"]);
        assert_eq!(view.currency(), CurrencyCode::EUR);
    }
}
