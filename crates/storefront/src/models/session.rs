//! Session-related types.
//!
//! The storefront session is either a guest (`None`) or a signed-in
//! [`CurrentUser`]. Sign-in is mocked, so the identity is whatever the
//! sign-in form produced.

use serde::{Deserialize, Serialize};

use vedic_hearth_core::{Email, UserId};

/// Session-stored user identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Session user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// User's email address.
    pub email: Email,
}

impl CurrentUser {
    /// Create a session user.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: Email) -> Self {
        Self {
            id,
            name: name.into(),
            email,
        }
    }

    /// First word of the display name, used for greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name() {
        let user = CurrentUser::new(
            UserId::new("1"),
            "Asha Devi",
            Email::parse("asha@example.com").unwrap(),
        );
        assert_eq!(user.first_name(), "Asha");
    }

    #[test]
    fn test_serde_roundtrip() {
        let user = CurrentUser::new(
            UserId::new("1"),
            "User",
            Email::parse("user@example.com").unwrap(),
        );
        let json = serde_json::to_string(&user).unwrap();
        let parsed: CurrentUser = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
    }
}
