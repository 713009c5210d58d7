//! Field validation command.
//!
//! # Usage
//!
//! ```bash
//! vh-cli validate email priya@example.com
//! vh-cli validate postal "SW1A 1AA" --country UK
//! ```

use std::io::Write;

use secrecy::{ExposeSecret, SecretString};
use vedic_hearth_storefront::validation;

use super::CliError;

/// A field value to check.
pub enum Field {
    Card(String),
    Email(String),
    Phone(String),
    Name(String),
    Password(SecretString),
    Postal { value: String, country: String },
}

impl Field {
    const fn label(&self) -> &'static str {
        match self {
            Self::Card(_) => "card number",
            Self::Email(_) => "email",
            Self::Phone(_) => "phone",
            Self::Name(_) => "name",
            Self::Password(_) => "password",
            Self::Postal { .. } => "postal code",
        }
    }
}

/// Check a field and print `valid` or `invalid`, with feedback for
/// passwords.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn check(field: &Field, out: &mut impl Write) -> Result<(), CliError> {
    let valid = match field {
        Field::Card(value) => validation::is_valid_card_number(value),
        Field::Email(value) => validation::is_valid_email(value),
        Field::Phone(value) => validation::is_valid_phone(value),
        Field::Name(value) => validation::is_valid_name(value),
        Field::Postal { value, country } => validation::is_valid_postal_code(value, country),
        Field::Password(value) => {
            let strength = validation::password_strength(value.expose_secret());
            writeln!(out, "score: {}/5", strength.score)?;
            for message in &strength.feedback {
                writeln!(out, "- {message}")?;
            }
            strength.is_valid
        }
    };

    tracing::info!(field = field.label(), valid, "Validated field");
    writeln!(
        out,
        "{} is {}",
        field.label(),
        if valid { "valid" } else { "invalid" }
    )?;
    Ok(())
}
