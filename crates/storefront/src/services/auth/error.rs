//! Authentication error types.

use thiserror::Error;

use crate::validation::FormErrors;

/// Errors that can occur during sign-in or sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// One or more form fields failed validation.
    #[error("{0}")]
    InvalidForm(FormErrors),
}

impl AuthError {
    /// Per-field messages for display next to the form.
    #[must_use]
    pub const fn field_errors(&self) -> &FormErrors {
        match self {
            Self::InvalidForm(errors) => errors,
        }
    }
}
