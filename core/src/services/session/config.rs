//! Configuration for the session authority

use chrono::Duration;
use rcp_shared::SessionConfig;

use crate::errors::DomainError;
use crate::services::token::whole_seconds;

/// Configuration for the session authority
#[derive(Debug, Clone)]
pub struct SessionAuthorityConfig {
    /// Lifetime of every issued token
    pub token_ttl: Duration,
}

impl SessionAuthorityConfig {
    /// Creates a configuration, rejecting a ttl that is not a positive whole
    /// number of seconds
    pub fn new(token_ttl: Duration) -> Result<Self, DomainError> {
        if whole_seconds(token_ttl).is_none() {
            return Err(DomainError::Validation {
                message: format!(
                    "token ttl must be a positive whole number of seconds, got {}ms",
                    token_ttl.num_milliseconds()
                ),
            });
        }

        Ok(Self { token_ttl })
    }
}

impl Default for SessionAuthorityConfig {
    fn default() -> Self {
        Self {
            token_ttl: Duration::hours(1),
        }
    }
}

impl TryFrom<&SessionConfig> for SessionAuthorityConfig {
    type Error = DomainError;

    fn try_from(config: &SessionConfig) -> Result<Self, Self::Error> {
        let ttl = Duration::try_seconds(config.token_ttl_seconds).ok_or_else(|| {
            DomainError::Validation {
                message: format!(
                    "token ttl of {}s is out of range",
                    config.token_ttl_seconds
                ),
            }
        })?;

        Self::new(ttl)
    }
}
