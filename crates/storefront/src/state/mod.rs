//! Client state store.
//!
//! [`StoreState`] is an immutable snapshot of the shopper's cart, wishlist,
//! session and display preferences. [`StoreState::apply`] is the single
//! mutation entry point: it takes a [`Command`] and returns the next
//! snapshot, leaving the current one untouched for any caller still
//! holding it. There is no global instance; callers own and thread the
//! state explicitly.

mod command;

pub use command::Command;

use std::sync::Arc;

use rust_decimal::Decimal;
use vedic_hearth_core::{CurrencyCode, LanguageCode, ProductId};

use crate::catalog::Product;
use crate::models::CurrentUser;

/// One product-and-quantity pairing in the cart.
///
/// `quantity` is always at least 1; lines that would drop to zero are
/// removed instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product: Arc<Product>,
    pub quantity: u32,
}

impl CartLine {
    fn new(product: Arc<Product>) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Unit price times quantity, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Preferences {
    pub currency: CurrencyCode,
    pub language: LanguageCode,
}

/// Immutable snapshot of client state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreState {
    cart: Vec<CartLine>,
    wishlist: Vec<Arc<Product>>,
    session: Option<CurrentUser>,
    preferences: Preferences,
}

impl StoreState {
    /// An empty guest state with the given preferences.
    #[must_use]
    pub fn with_preferences(preferences: Preferences) -> Self {
        Self {
            preferences,
            ..Self::default()
        }
    }

    /// Apply a command, returning the next state.
    ///
    /// Total and deterministic: every command yields a state, and commands
    /// naming absent products or unsupported codes return an equal state.
    #[must_use]
    pub fn apply(&self, command: &Command) -> Self {
        let mut next = self.clone();

        match command {
            Command::AddToCart(product) => {
                if let Some(line) = next.line_mut(&product.id) {
                    line.quantity = line.quantity.saturating_add(1);
                } else {
                    next.cart.push(CartLine::new(Arc::clone(product)));
                }
            }
            Command::RemoveFromCart(id) => {
                next.cart.retain(|line| &line.product.id != id);
            }
            Command::SetCartQuantity { id, quantity } => {
                if *quantity <= 0 {
                    next.cart.retain(|line| &line.product.id != id);
                } else if let Some(line) = next.line_mut(id) {
                    line.quantity = u32::try_from(*quantity).unwrap_or(u32::MAX);
                }
            }
            Command::ClearCart => next.cart.clear(),
            Command::AddToWishlist(product) => {
                if !next.is_in_wishlist(&product.id) {
                    next.wishlist.push(Arc::clone(product));
                }
            }
            Command::RemoveFromWishlist(id) => {
                next.wishlist.retain(|p| &p.id != id);
            }
            Command::ToggleWishlist(product) => {
                if next.is_in_wishlist(&product.id) {
                    next.wishlist.retain(|p| p.id != product.id);
                } else {
                    next.wishlist.push(Arc::clone(product));
                }
            }
            Command::SetSession(session) => next.session.clone_from(session),
            Command::SetCurrency(code) => match code.parse::<CurrencyCode>() {
                Ok(currency) => next.preferences.currency = currency,
                Err(_) => tracing::debug!(code = %code, "Ignoring unsupported currency"),
            },
            Command::SetLanguage(code) => match LanguageCode::parse(code) {
                Some(language) => next.preferences.language = language,
                None => tracing::debug!("Ignoring blank language code"),
            },
        }

        tracing::trace!(
            command = command.name(),
            cart_lines = next.cart.len(),
            wishlist = next.wishlist.len(),
            "State updated"
        );
        next
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.cart.iter_mut().find(|line| &line.product.id == id)
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    /// Wishlist entries in insertion order.
    #[must_use]
    pub fn wishlist(&self) -> &[Arc<Product>] {
        &self.wishlist
    }

    /// The signed-in user, or `None` for a guest.
    #[must_use]
    pub const fn session(&self) -> Option<&CurrentUser> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Selected display currency.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.preferences.currency
    }

    /// Returns true if a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Returns true if the product is on the wishlist.
    #[must_use]
    pub fn is_in_wishlist(&self, id: &ProductId) -> bool {
        self.wishlist.iter().any(|p| &p.id == id)
    }

    /// Quantity of a product in the cart (0 when absent).
    #[must_use]
    pub fn cart_quantity(&self, id: &ProductId) -> u32 {
        self.cart
            .iter()
            .find(|line| &line.product.id == id)
            .map_or(0, |line| line.quantity)
    }
}
