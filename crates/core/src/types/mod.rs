//! Core types for Vedic Hearth.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod email;
pub mod id;
pub mod locale;
pub mod price;

pub use category::Category;
pub use email::{Email, EmailError};
pub use id::*;
pub use locale::LanguageCode;
pub use price::{CurrencyCode, Price, format_grouped};
