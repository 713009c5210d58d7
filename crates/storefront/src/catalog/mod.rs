//! Static product catalog.
//!
//! The catalog is read once (from the embedded seed or a configured JSON
//! file), validated, and then shared read-only. Products are held behind
//! `Arc` so cart lines and wishlist entries can reference them without
//! copying.

mod product;

#[cfg(test)]
pub(crate) use product::fixtures;
pub use product::Product;

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use vedic_hearth_core::{Category, ProductId};

/// Seed catalog shipped with the storefront.
const SEED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON or does not match the product shape.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A product has an empty ID.
    #[error("product at index {index} has an empty id")]
    EmptyId { index: usize },

    /// Two products share an ID.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// A product has an empty name.
    #[error("product {0} has an empty name")]
    EmptyName(ProductId),

    /// A price is zero or negative.
    #[error("product {id} has a non-positive price: {price}")]
    NonPositivePrice { id: ProductId, price: Decimal },
}

/// The read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from products, validating the catalog contract.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if an ID is empty or duplicated, a name is
    /// empty, or a price (or original price) is not positive.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());

        for (index, product) in products.iter().enumerate() {
            if product.id.is_blank() {
                return Err(CatalogError::EmptyId { index });
            }
            if !seen.insert(product.id.clone()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(product.id.clone()));
            }
            for price in std::iter::once(product.price).chain(product.original_price) {
                if price <= Decimal::ZERO {
                    return Err(CatalogError::NonPositivePrice {
                        id: product.id.clone(),
                        price,
                    });
                }
            }
        }

        let products: Vec<Arc<Product>> = products.into_iter().map(Arc::new).collect();
        let index = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();

        Ok(Self { products, index })
    }

    /// Parse and validate a catalog from JSON (an array of products).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON, or a validation
    /// error as described in [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, or any error
    /// from [`Catalog::from_json`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// The seed catalog embedded in the crate.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded seed is malformed.
    pub fn seed() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(SEED_CATALOG)?;
        tracing::debug!(products = catalog.len(), "Seed catalog loaded");
        Ok(catalog)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Arc<Product>> {
        self.index.get(id).and_then(|&i| self.products.get(i))
    }

    /// Featured products, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.products.iter().filter(|p| p.featured)
    }

    /// Products in a category, in catalog order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Arc<Product>> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
