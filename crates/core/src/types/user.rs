//! The stub-authenticated user.

use serde::{Deserialize, Serialize};

use crate::types::id::UserId;

/// The current user, fabricated at login from the submitted email.
///
/// The email is stored verbatim with no shape validation, matching the
/// presence-only login stub; the record exists only for the lifetime of
/// the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier derived from the email (`user_<email>`).
    pub id: UserId,
    /// Display name: the text before the first `@`, or the whole email.
    pub name: String,
    /// The submitted email, as entered.
    pub email: String,
}

impl User {
    /// Fabricate a user record from the submitted email.
    #[must_use]
    pub fn from_email(email: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            id: UserId::new(format!("user_{email}")),
            name: email.split('@').next().unwrap_or_default().to_owned(),
            email,
        }
    }

    /// Uppercase first letter of the display name, for the avatar badge.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}
