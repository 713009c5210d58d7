//! Mock authentication.
//!
//! Sign-in and sign-up only validate the submitted form; no credentials
//! are stored or verified. A successful call returns the user to place in
//! the session with `Command::SetSession`.

mod error;

pub use error::AuthError;

use secrecy::{ExposeSecret, SecretString};

use vedic_hearth_core::{Email, UserId};

use crate::models::CurrentUser;
use crate::validation::{self, FormErrors, MIN_PASSWORD_LENGTH};

/// Display name given to users who sign in without a profile.
pub const DEFAULT_USER_NAME: &str = "User";

/// Sign-in form.
#[derive(Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

/// Sign-up form.
#[derive(Debug)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

/// Sign in with email and password.
///
/// # Errors
///
/// Returns `AuthError::InvalidForm` if the email is malformed or the
/// password is empty.
pub fn login(form: &LoginForm) -> Result<CurrentUser, AuthError> {
    let mut errors = FormErrors::new();
    let email = check_email(&mut errors, &form.email);
    errors.require(
        "password",
        !form.password.expose_secret().is_empty(),
        "Password is required",
    );

    let email = finish(errors, email)?;
    let user = CurrentUser::new(UserId::generate(), DEFAULT_USER_NAME, email);
    tracing::info!(user_id = %user.id, email = %user.email, "User signed in");
    Ok(user)
}

/// Create an account.
///
/// # Errors
///
/// Returns `AuthError::InvalidForm` if the name is blank, the email is
/// malformed, the password is too short, or the confirmation differs.
pub fn signup(form: &SignupForm) -> Result<CurrentUser, AuthError> {
    let mut errors = FormErrors::new();
    let name = form.name.trim();
    errors.require("name", validation::is_present(name), "Name is required");
    let email = check_email(&mut errors, &form.email);

    let password = form.password.expose_secret();
    errors.require(
        "password",
        password.chars().count() >= MIN_PASSWORD_LENGTH,
        "Password must be at least 8 characters",
    );
    errors.require(
        "confirm_password",
        password == form.confirm_password.expose_secret(),
        "Passwords do not match",
    );

    let email = finish(errors, email)?;
    let user = CurrentUser::new(UserId::generate(), name, email);
    tracing::info!(user_id = %user.id, email = %user.email, "Account created");
    Ok(user)
}

fn check_email(errors: &mut FormErrors, input: &str) -> Option<Email> {
    let input = input.trim();
    let email = validation::is_valid_email(input)
        .then(|| Email::parse(input).ok())
        .flatten();
    if email.is_none() {
        errors.require("email", false, "Enter a valid email address");
    }
    email
}

fn finish(errors: FormErrors, email: Option<Email>) -> Result<Email, AuthError> {
    match email {
        Some(email) if errors.is_valid() => Ok(email),
        _ => {
            tracing::debug!(fields = errors.len(), "Rejected authentication form");
            Err(AuthError::InvalidForm(errors))
        }
    }
}
