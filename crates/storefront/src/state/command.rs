//! Commands accepted by the state store.

use std::sync::Arc;

use vedic_hearth_core::ProductId;

use crate::catalog::Product;
use crate::models::CurrentUser;

/// A state transition request, produced by UI events.
///
/// Every command is total: applying it to any state yields a new state,
/// and commands that reference absent products are no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add one unit of a product, merging with an existing line.
    AddToCart(Arc<Product>),
    /// Remove a product's line from the cart.
    RemoveFromCart(ProductId),
    /// Set a line's quantity exactly; `quantity <= 0` removes the line.
    SetCartQuantity { id: ProductId, quantity: i64 },
    ClearCart,
    /// Add a product to the wishlist unless it is already there.
    AddToWishlist(Arc<Product>),
    RemoveFromWishlist(ProductId),
    /// Remove the product from the wishlist if present, otherwise add it.
    ToggleWishlist(Arc<Product>),
    /// Replace the session (`None` signs out).
    SetSession(Option<CurrentUser>),
    /// Switch display currency by code; unsupported codes are ignored.
    SetCurrency(String),
    /// Switch display language by code; blank codes are ignored.
    SetLanguage(String),
}

impl Command {
    /// Stable command name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddToCart(_) => "add_to_cart",
            Self::RemoveFromCart(_) => "remove_from_cart",
            Self::SetCartQuantity { .. } => "set_cart_quantity",
            Self::ClearCart => "clear_cart",
            Self::AddToWishlist(_) => "add_to_wishlist",
            Self::RemoveFromWishlist(_) => "remove_from_wishlist",
            Self::ToggleWishlist(_) => "toggle_wishlist",
            Self::SetSession(_) => "set_session",
            Self::SetCurrency(_) => "set_currency",
            Self::SetLanguage(_) => "set_language",
        }
    }
}
