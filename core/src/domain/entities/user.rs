//! User account entity used by the login flow.

use rcp_shared::SeedUser;
use serde::Serialize;

/// A registered account able to obtain session tokens
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct AuthUser {
    /// Unique login name, also the token subject
    pub username: String,

    pub email: Option<String>,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Inactive accounts cannot log in and their tokens stop authenticating
    pub active: bool,
}

impl AuthUser {
    /// Creates a new active user
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: None,
            password_hash: password_hash.into(),
            active: true,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

impl From<SeedUser> for AuthUser {
    fn from(seed: SeedUser) -> Self {
        Self {
            username: seed.username,
            email: seed.email,
            password_hash: seed.password_hash,
            active: seed.active,
        }
    }
}

impl std::fmt::Debug for AuthUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
