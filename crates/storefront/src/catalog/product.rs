//! Product domain type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use vedic_hearth_core::{Category, CurrencyCode, Price, ProductId};

/// A purchasable product from the static catalog.
///
/// Products are immutable once loaded; the cart and wishlist hold shared
/// references to them rather than copies. Keys are snake_case; the
/// camelCase spellings `originalPrice` and `inStock` are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Short marketing description.
    pub description: String,
    /// Image path or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Unit price in the store's base unit.
    pub price: Decimal,
    /// Pre-discount price, shown struck through when higher than `price`.
    #[serde(
        default,
        alias = "originalPrice",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<Decimal>,
    /// Category label.
    pub category: Category,
    /// Whether the product can currently be added to the cart.
    #[serde(alias = "inStock")]
    pub in_stock: bool,
    /// Pack size or weight (e.g., "500ml").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
    /// Shown on the home page and sorted first by default.
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Unit price in the given display currency.
    #[must_use]
    pub const fn price_in(&self, currency: CurrencyCode) -> Price {
        Price::new(self.price, currency)
    }

    /// Amount saved against the original price, if there is a markdown.
    #[must_use]
    pub fn savings(&self) -> Option<Decimal> {
        self.original_price
            .filter(|original| *original > self.price)
            .map(|original| original - self.price)
    }

    /// Case-insensitive substring match on name or description.
    ///
    /// `needle` must already be lower-cased.
    #[must_use]
    pub fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}
