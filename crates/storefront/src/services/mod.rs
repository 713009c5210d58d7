//! Storefront services.
//!
//! - `auth` - Mock sign-in and sign-up

pub mod auth;

pub use auth::{AuthError, LoginForm, SignupForm};
