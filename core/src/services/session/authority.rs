//! Session authority: issuance, validation and revocation of session tokens

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rcp_shared::SessionConfig;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{self as codec, SigningKey};

use super::clock::{Clock, SystemClock};
use super::config::SessionAuthorityConfig;
use super::revocation::RevocationSet;

/// Owner of the signing key and the revocation set.
///
/// Shared across request handlers behind an `Arc`. The key and ttl are
/// read-only after construction; the revocation set is the only mutable
/// state.
pub struct SessionAuthority {
    signing_key: SigningKey,
    config: SessionAuthorityConfig,
    revoked: RevocationSet,
    clock: Arc<dyn Clock>,
}

impl SessionAuthority {
    /// Creates an authority using the system clock
    pub fn new(signing_key: SigningKey, config: SessionAuthorityConfig) -> Self {
        Self::with_clock(signing_key, config, Arc::new(SystemClock))
    }

    /// Creates an authority reading time from `clock`
    pub fn with_clock(
        signing_key: SigningKey,
        config: SessionAuthorityConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            signing_key,
            config,
            revoked: RevocationSet::new(),
            clock,
        }
    }

    /// Process start path: validates the configured ttl and generates a
    /// fresh signing key
    pub fn from_config(config: &SessionConfig) -> Result<Self, DomainError> {
        let config = SessionAuthorityConfig::try_from(config)?;

        tracing::info!(
            ttl_seconds = config.token_ttl.num_seconds(),
            "Generated session signing key"
        );

        Ok(Self::new(SigningKey::generate(), config))
    }

    /// Issues a token for `subject`, valid from now for the configured ttl
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed token
    /// * `Err(TokenError::Encoding)` - `subject` was empty
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let token = codec::encode(
            subject,
            self.clock.now(),
            self.config.token_ttl,
            &self.signing_key,
        )?;

        tracing::debug!(subject = %subject, "Issued session token");
        Ok(token)
    }

    /// Verifies the signature of `token` and applies `resolver` to its claims
    pub fn extract_claim<T, F>(&self, token: &str, resolver: F) -> Result<T, TokenError>
    where
        F: FnOnce(Claims) -> T,
    {
        let claims = codec::decode(token, &self.signing_key)?;
        Ok(resolver(claims))
    }

    pub fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        self.extract_claim(token, Claims::into_subject)
    }

    pub fn extract_expiry(&self, token: &str) -> Result<DateTime<Utc>, TokenError> {
        self.extract_claim(token, |claims| claims.expires_at())
    }

    /// Runs every validity check and reports the first failure.
    ///
    /// Order: revocation membership (cheapest), signature, subject, expiry.
    /// All four must pass for the token to be accepted.
    pub fn check(&self, token: &str, expected_subject: &str) -> Result<Claims, TokenError> {
        if self.revoked.contains(token) {
            return Err(TokenError::Revoked);
        }

        let claims = codec::decode(token, &self.signing_key)?;

        if claims.subject() != expected_subject {
            return Err(TokenError::SubjectMismatch);
        }

        if claims.is_expired_at(self.clock.now()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Authorization gate for protected routes.
    ///
    /// Fails closed: every failure is `false`, the reason only reaches the
    /// debug log.
    pub fn is_valid(&self, token: &str, expected_subject: &str) -> bool {
        match self.check(token, expected_subject) {
            Ok(_) => true,
            Err(reason) => {
                tracing::debug!(subject = %expected_subject, %reason, "Rejected session token");
                false
            }
        }
    }

    /// Revokes `token`. Idempotent; the token does not need to be valid.
    pub fn revoke(&self, token: &str) {
        if self.revoked.insert(token) {
            tracing::info!(revoked_total = self.revoked.len(), "Session token revoked");
        }
    }

    /// Removes `token` from the revocation set. Idempotent.
    ///
    /// A reinstated token is valid again only if it has not expired.
    pub fn unrevoke(&self, token: &str) {
        if self.revoked.remove(token) {
            tracing::info!(revoked_total = self.revoked.len(), "Session token reinstated");
        }
    }

    pub fn is_revoked(&self, token: &str) -> bool {
        self.revoked.contains(token)
    }

    /// Number of tokens currently in the revocation set
    pub fn revoked_count(&self) -> usize {
        self.revoked.len()
    }

    pub fn token_ttl(&self) -> Duration {
        self.config.token_ttl
    }
}

impl std::fmt::Debug for SessionAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionAuthority")
            .field("signing_key", &self.signing_key)
            .field("token_ttl", &self.config.token_ttl)
            .field("revoked", &self.revoked.len())
            .finish_non_exhaustive()
    }
}
