//! Product list filters and sort order.
//!
//! Filter parameters arrive as the raw strings the product page uses
//! (`category=cow-ghee`, `price=300-599`, `sort=price-low`). Anything
//! unrecognized falls back to "no filter" or the default sort.

use core::cmp::Ordering;
use core::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use vedic_hearth_core::Category;

use crate::catalog::Product;

/// Sentinel meaning "do not filter".
pub const ALL: &str = "all";

/// Category filter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse from a category slug; unknown slugs mean no filter.
    #[must_use]
    pub fn parse(slug: &str) -> Self {
        let slug = slug.trim();
        if slug.is_empty() || slug == ALL {
            return Self::All;
        }
        Category::from_slug(slug).map_or_else(
            || {
                tracing::debug!(slug, "Unknown category filter, showing all");
                Self::All
            },
            Self::Only,
        )
    }

    /// Returns true if the product passes this filter.
    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == category,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => ALL,
            Self::Only(category) => category.slug(),
        }
    }
}

/// Half-open price range `[min, max)`; `max = None` is unbounded.
///
/// Bucket labels name whole currency units inclusively, so `300-599`
/// covers `[300, 600)` and adjacent labels leave no gaps. A bare `2000`
/// means 2000 and above.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PriceBucket {
    #[default]
    All,
    Range { min: Decimal, max: Option<Decimal> },
}

impl PriceBucket {
    /// Buckets offered by the product page, in display order.
    pub const LABELS: [&'static str; 6] = [ALL, "0-299", "300-599", "600-999", "1000-1999", "2000"];

    /// Parse a bucket label; unparseable labels mean no filter.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() || label == ALL {
            return Self::All;
        }

        let parsed = match label.split_once('-') {
            Some((min, max)) => min
                .trim()
                .parse::<Decimal>()
                .ok()
                .zip(max.trim().parse::<Decimal>().ok())
                .filter(|(min, max)| min <= max)
                .map(|(min, max)| Self::Range {
                    min,
                    // An upper bound at the top of the range is open-ended.
                    max: max.checked_add(Decimal::ONE),
                }),
            None => label
                .parse::<Decimal>()
                .ok()
                .map(|min| Self::Range { min, max: None }),
        };

        parsed.unwrap_or_else(|| {
            tracing::debug!(label, "Unrecognized price bucket, showing all");
            Self::All
        })
    }

    /// Returns true if the price falls inside the bucket.
    #[must_use]
    pub fn contains(self, price: Decimal) -> bool {
        match self {
            Self::All => true,
            Self::Range { min, max } => price >= min && max.is_none_or(|max| price < max),
        }
    }
}

impl fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Range { min, max: None } => write!(f, "{min}"),
            Self::Range {
                min,
                max: Some(max),
            } => write!(f, "{min}-{}", max.saturating_sub(Decimal::ONE)),
        }
    }
}

/// Product list sort order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Featured products first, catalog order otherwise.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Name,
}

impl SortKey {
    /// Parse from URL parameter value.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "name" => Self::Name,
            _ => Self::Featured,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Name => "name",
        }
    }

    /// Stable in-place sort.
    pub fn sort(self, products: &mut [Arc<Product>]) {
        match self {
            Self::Featured => products.sort_by_key(|p| !p.featured),
            Self::PriceLow => products.sort_by(|a, b| a.price.cmp(&b.price)),
            Self::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
            Self::Name => products.sort_by(|a, b| compare_names(&a.name, &b.name)),
        }
    }
}

/// Locale-style name ordering: case-insensitive first, then exact.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Transient product list parameters.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CatalogFilters {
    pub category: CategoryFilter,
    /// Free-text query; blank means no filter.
    pub query: String,
    pub price: PriceBucket,
    pub sort: SortKey,
}

impl CatalogFilters {
    /// Build filters from raw page parameters.
    #[must_use]
    pub fn from_params(category: &str, query: &str, price: &str, sort: &str) -> Self {
        Self {
            category: CategoryFilter::parse(category),
            query: query.to_owned(),
            price: PriceBucket::parse(price),
            sort: SortKey::parse(sort),
        }
    }

    /// Returns true if the product passes every filter.
    ///
    /// `needle` is the lower-cased, trimmed query (empty for none).
    fn matches(&self, product: &Product, needle: &str) -> bool {
        self.category.matches(product)
            && (needle.is_empty() || product.matches_query(needle))
            && self.price.contains(product.price)
    }

    /// Filter then sort a product list.
    #[must_use]
    pub fn apply(&self, products: &[Arc<Product>]) -> Vec<Arc<Product>> {
        let needle = self.query.trim().to_lowercase();
        let mut visible: Vec<Arc<Product>> = products
            .iter()
            .filter(|p| self.matches(p, &needle))
            .cloned()
            .collect();
        self.sort.sort(&mut visible);
        visible
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::catalog::fixtures::product;

    /// Six products priced as on the product page mock-up.
    fn sample() -> Vec<Arc<Product>> {
        let specs = [
            ("1", "Pure A2 Cow Ghee", 899, Category::CowGhee, true),
            ("2", "Cow Dung Diyas Set", 299, Category::CowDungCrafts, true),
            ("3", "organic Fertilizer", 199, Category::OrganicFarming, false),
            ("4", "Ghee Family Pack", 2499, Category::CowGhee, true),
            ("5", "Herbal Dhoop Sticks", 149, Category::CowDungCrafts, false),
            ("6", "Vermicompost", 1699, Category::OrganicFarming, false),
        ];
        specs
            .into_iter()
            .map(|(id, name, price, category, featured)| {
                let mut p = product(id, name, price);
                p.category = category;
                p.featured = featured;
                Arc::new(p)
            })
            .collect()
    }

    fn prices(products: &[Arc<Product>]) -> Vec<i64> {
        products
            .iter()
            .map(|p| i64::try_from(p.price.mantissa()).unwrap())
            .collect()
    }

    fn ids(products: &[Arc<Product>]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_price_bucket_parse() {
        assert_eq!(PriceBucket::parse("all"), PriceBucket::All);
        assert_eq!(
            PriceBucket::parse("300-599"),
            PriceBucket::Range {
                min: Decimal::from(300),
                max: Some(Decimal::from(600)),
            }
        );
        assert_eq!(
            PriceBucket::parse("2000"),
            PriceBucket::Range {
                min: Decimal::from(2000),
                max: None,
            }
        );
        assert_eq!(PriceBucket::parse("cheap"), PriceBucket::All);
        assert_eq!(PriceBucket::parse("600-300"), PriceBucket::All);
        assert_eq!(PriceBucket::parse("-5"), PriceBucket::All);
    }

    #[test]
    fn test_price_bucket_parse_largest_upper_bound() {
        let top = Decimal::MAX.to_string();
        let bucket = PriceBucket::parse(&format!("0-{top}"));
        assert_eq!(
            bucket,
            PriceBucket::Range {
                min: Decimal::ZERO,
                max: None,
            }
        );
        assert!(bucket.contains(Decimal::MAX));

        let bucket = PriceBucket::parse(&format!("{top}-{top}"));
        assert!(bucket.contains(Decimal::MAX));
        assert!(!bucket.contains(Decimal::ONE));
    }

    #[test]
    fn test_price_bucket_display_roundtrip() {
        for label in PriceBucket::LABELS {
            assert_eq!(PriceBucket::parse(label).to_string(), label);
        }
    }

    #[test]
    fn test_price_bucket_edges() {
        let bucket = PriceBucket::parse("0-299");
        assert!(bucket.contains(Decimal::from(299)));
        assert!(bucket.contains(Decimal::new(29_950, 2)));
        assert!(!bucket.contains(Decimal::from(300)));
        assert!(PriceBucket::parse("300-599").contains(Decimal::from(300)));
    }

    #[test]
    fn test_filter_by_bucket() {
        let products = sample();

        let filters = CatalogFilters::from_params("all", "", "0-299", "price-low");
        assert_eq!(prices(&filters.apply(&products)), vec![149, 199, 299]);

        let filters = CatalogFilters::from_params("all", "", "300-599", "featured");
        assert!(filters.apply(&products).is_empty());

        let filters = CatalogFilters::from_params("all", "", "2000", "featured");
        assert_eq!(prices(&filters.apply(&products)), vec![2499]);
    }

    #[test]
    fn test_sort_price_low_and_high() {
        let products = sample();

        let low = CatalogFilters::from_params("all", "", "all", "price-low").apply(&products);
        assert_eq!(prices(&low), vec![149, 199, 299, 899, 1699, 2499]);

        let high = CatalogFilters::from_params("all", "", "all", "price-high").apply(&products);
        assert_eq!(prices(&high), vec![2499, 1699, 899, 299, 199, 149]);
    }

    #[test]
    fn test_sort_featured_is_stable() {
        let products = sample();
        let sorted = CatalogFilters::default().apply(&products);
        assert_eq!(ids(&sorted), vec!["1", "2", "4", "3", "5", "6"]);
    }

    #[test]
    fn test_unknown_sort_falls_back_to_featured() {
        assert_eq!(SortKey::parse("rating"), SortKey::Featured);
    }

    #[test]
    fn test_sort_by_name_case_insensitive() {
        let products = sample();
        let sorted = CatalogFilters::from_params("all", "", "all", "name").apply(&products);
        assert_eq!(
            sorted.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            vec![
                "Cow Dung Diyas Set",
                "Ghee Family Pack",
                "Herbal Dhoop Sticks",
                "organic Fertilizer",
                "Pure A2 Cow Ghee",
                "Vermicompost",
            ]
        );
    }

    #[test]
    fn test_filter_by_category() {
        let products = sample();
        let filters = CatalogFilters::from_params("cow-ghee", "", "all", "price-low");
        assert_eq!(ids(&filters.apply(&products)), vec!["1", "4"]);
    }

    #[test]
    fn test_unknown_category_keeps_all() {
        let products = sample();
        let filters = CatalogFilters::from_params("incense", "", "all", "featured");
        assert_eq!(filters.category, CategoryFilter::All);
        assert_eq!(filters.apply(&products).len(), products.len());
    }

    #[test]
    fn test_query_matches_name_and_description_case_insensitive() {
        let products = sample();

        let filters = CatalogFilters::from_params("all", "GHEE", "all", "price-low");
        assert_eq!(ids(&filters.apply(&products)), vec!["1", "4"]);

        // Fixture descriptions are "<name> description".
        let filters = CatalogFilters::from_params("all", "DESCRIPTION", "all", "price-low");
        assert_eq!(filters.apply(&products).len(), 6);

        let filters = CatalogFilters::from_params("all", "   ", "all", "featured");
        assert_eq!(filters.apply(&products).len(), 6);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let products = sample();
        let filters = CatalogFilters::from_params("cow-dung-crafts", "dhoop", "0-299", "featured");
        assert_eq!(ids(&filters.apply(&products)), vec!["5"]);
    }

    fn filters_strategy() -> impl Strategy<Value = CatalogFilters> {
        (
            proptest::sample::select(vec!["all", "cow-ghee", "cow-dung-crafts", "organic-farming", "soaps", "bogus"]),
            proptest::sample::select(vec!["", "ghee", "COW", "set", "zzz"]),
            proptest::sample::select(PriceBucket::LABELS.to_vec()),
            proptest::sample::select(vec!["featured", "price-low", "price-high", "name"]),
        )
            .prop_map(|(c, q, p, s)| CatalogFilters::from_params(c, q, p, s))
    }

    proptest! {
        #[test]
        fn prop_filtering_is_idempotent(filters in filters_strategy()) {
            let products = sample();
            let once = filters.apply(&products);
            let twice = filters.apply(&once);
            prop_assert_eq!(ids(&once), ids(&twice));
        }

        #[test]
        fn prop_filtering_never_adds_products(filters in filters_strategy()) {
            let products = sample();
            let visible = filters.apply(&products);
            prop_assert!(visible.len() <= products.len());
            prop_assert!(visible.iter().all(|p| filters.price.contains(p.price)));
        }
    }
}
