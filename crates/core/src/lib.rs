//! Vedic Hearth Core - Shared types library.
//!
//! This crate provides common types used across all Vedic Hearth components:
//! - `storefront` - Catalog, cart state store, derived views and checkout
//! - `cli` - Command-line front end for browsing and cart simulation
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no global state,
//! no logging. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, emails, categories
//!   and locale preferences

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
