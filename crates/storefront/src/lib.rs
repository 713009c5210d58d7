//! Vedic Hearth storefront library.
//!
//! The shopper-side core of the storefront: an immutable state store for
//! cart, wishlist, session and preferences, and pure derivations from that
//! state plus the static catalog (filtered listings, cart and order
//! summaries). Everything here is synchronous and free of I/O except for
//! catalog and configuration loading.
//!
//! ```rust
//! use vedic_hearth_storefront::catalog::Catalog;
//! use vedic_hearth_storefront::state::{Command, StoreState};
//! use vedic_hearth_storefront::view::{self, CatalogFilters};
//!
//! let catalog = Catalog::seed().expect("seed catalog");
//! let ghee = catalog.products()[0].clone();
//!
//! let state = StoreState::default().apply(&Command::AddToCart(ghee));
//! let view = view::derive(&catalog, &state, &CatalogFilters::default());
//!
//! assert_eq!(view.cart.item_count, 1);
//! assert_eq!(view.cart.formatted_subtotal(), "₹899");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod validation;
pub mod view;

pub use error::{AppError, Result};
