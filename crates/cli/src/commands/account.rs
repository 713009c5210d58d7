//! Mock sign-in and sign-up commands.
//!
//! The resulting user is placed in a fresh session to show the greeting a
//! shopper would see; nothing is persisted.

use std::io::Write;

use secrecy::SecretString;
use vedic_hearth_storefront::AppError;
use vedic_hearth_storefront::models::CurrentUser;
use vedic_hearth_storefront::services::{LoginForm, SignupForm, auth};
use vedic_hearth_storefront::state::Command;

use super::{CliError, Context};

/// Sign in and print the session greeting.
///
/// # Errors
///
/// Returns an error if the form is rejected or output fails.
pub fn login(
    ctx: &Context,
    email: String,
    password: SecretString,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let user = auth::login(&LoginForm { email, password }).map_err(AppError::from)?;
    greet(ctx, user, out)
}

/// Create an account and print the session greeting.
///
/// # Errors
///
/// Returns an error if the form is rejected or output fails.
pub fn signup(ctx: &Context, form: &SignupForm, out: &mut impl Write) -> Result<(), CliError> {
    let user = auth::signup(form).map_err(AppError::from)?;
    greet(ctx, user, out)
}

fn greet(ctx: &Context, user: CurrentUser, out: &mut impl Write) -> Result<(), CliError> {
    let state = ctx.initial_state(None)?.apply(&Command::SetSession(Some(user)));
    if let Some(user) = state.session() {
        writeln!(out, "Welcome, {}!", user.first_name())?;
        writeln!(out, "Signed in as {} <{}>", user.name, user.email)?;
    }
    Ok(())
}
