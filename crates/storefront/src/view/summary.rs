//! Cart totals.

use rust_decimal::Decimal;
use vedic_hearth_core::{CurrencyCode, Price};

use crate::state::CartLine;

/// Derived cart totals for the header badge and cart page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    /// Sum of quantities across lines.
    pub item_count: u64,
    /// Sum of unit price times quantity, saturating at `Decimal::MAX`.
    pub subtotal: Decimal,
    pub currency: CurrencyCode,
}

impl CartSummary {
    /// Compute totals over cart lines.
    #[must_use]
    pub fn from_lines(lines: &[CartLine], currency: CurrencyCode) -> Self {
        let item_count = lines.iter().map(|line| u64::from(line.quantity)).sum();
        let subtotal = lines
            .iter()
            .map(CartLine::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        Self {
            item_count,
            subtotal,
            currency,
        }
    }

    /// Subtotal formatted in the selected currency (e.g. "₹2,097").
    #[must_use]
    pub fn formatted_subtotal(&self) -> String {
        Price::new(self.subtotal, self.currency).display()
    }

    /// Returns true if the cart has no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::fixtures::product;
    use crate::state::{Command, StoreState};

    #[test]
    fn test_summary_two_lines() {
        let ghee = Arc::new(product("1", "Ghee", 899));
        let diyas = Arc::new(product("2", "Diyas", 299));
        let state = StoreState::default()
            .apply(&Command::AddToCart(Arc::clone(&ghee)))
            .apply(&Command::AddToCart(ghee))
            .apply(&Command::AddToCart(diyas));

        let summary = CartSummary::from_lines(state.cart(), state.currency());
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.subtotal, Decimal::from(2097));
        assert_eq!(summary.formatted_subtotal(), "₹2,097");
    }

    #[test]
    fn test_subtotal_saturates_on_huge_cart() {
        let huge: Decimal = "10000000000000000000000".parse().unwrap();
        let state = ["1", "2"].iter().fold(StoreState::default(), |state, id| {
            let item = Arc::new(crate::catalog::Product {
                price: huge,
                ..product(id, "Gaushala Share", 1)
            });
            state
                .apply(&Command::AddToCart(item))
                .apply(&Command::SetCartQuantity {
                    id: (*id).into(),
                    quantity: 100_000_000,
                })
        });

        let summary = CartSummary::from_lines(state.cart(), state.currency());
        assert_eq!(summary.item_count, 200_000_000);
        assert_eq!(summary.subtotal, Decimal::MAX);
        assert!(summary.formatted_subtotal().starts_with("₹79,228,162"));
    }

    #[test]
    fn test_empty_summary() {
        let summary = CartSummary::from_lines(&[], CurrencyCode::EUR);
        assert!(summary.is_empty());
        assert_eq!(summary.formatted_subtotal(), "€0");
    }
}
