//! Authentication and session configuration

use serde::{Deserialize, Serialize};

/// Default session token lifetime (1 hour)
const DEFAULT_TOKEN_TTL_SECONDS: i64 = 3600;

/// Longest accepted session token lifetime (365 days)
pub const MAX_TOKEN_TTL_SECONDS: i64 = 365 * 24 * 60 * 60;

/// Session token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Lifetime of an issued session token in seconds
    pub token_ttl_seconds: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
        }
    }
}

impl SessionConfig {
    /// Create a session configuration with the given ttl in seconds
    pub fn new(token_ttl_seconds: i64) -> Self {
        Self { token_ttl_seconds }
    }

    /// The ttl must be at least one second and at most
    /// [`MAX_TOKEN_TTL_SECONDS`]
    pub fn has_valid_ttl(&self) -> bool {
        (1..=MAX_TOKEN_TTL_SECONDS).contains(&self.token_ttl_seconds)
    }
}

/// A user account provisioned from configuration.
///
/// `password_hash` is a bcrypt hash; plaintext passwords never appear in config.
#[derive(Clone, Deserialize, Serialize)]
pub struct SeedUser {
    pub username: String,

    #[serde(default)]
    pub email: Option<String>,

    pub password_hash: String,

    #[serde(default = "default_active")]
    pub active: bool,
}

impl std::fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("active", &self.active)
            .finish()
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Session token configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// Accounts available at startup
    #[serde(default)]
    pub users: Vec<SeedUser>,
}

impl AuthConfig {
    /// Get token ttl in seconds
    pub fn token_ttl_seconds(&self) -> i64 {
        self.session.token_ttl_seconds
    }
}

fn default_active() -> bool {
    true
}
