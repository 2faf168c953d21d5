//! Main authentication service implementation

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::user::AuthUser;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::session::SessionAuthority;

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: AuthUser,
    pub token: String,
}

/// Caller identity established from a valid token
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub user: AuthUser,
    pub expires_at: DateTime<Utc>,
}

/// Authentication service for the login, logout and guard flows
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User lookups
    user_repository: Arc<U>,
    /// Token issuance, validation and revocation
    authority: Arc<SessionAuthority>,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    pub fn new(user_repository: Arc<U>, authority: Arc<SessionAuthority>) -> Self {
        Self {
            user_repository,
            authority,
        }
    }

    pub fn authority(&self) -> &Arc<SessionAuthority> {
        &self.authority
    }

    /// Log a user in with username and password
    ///
    /// Unknown usernames and wrong passwords both fail with
    /// `AuthError::InvalidCredentials`. Account status is only reported once
    /// the password has been proven.
    ///
    /// # Returns
    ///
    /// * `Ok(LoginOutcome)` - The user and a freshly issued token
    /// * `Err(DomainError)` - Credentials rejected or the password hash is unusable
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<LoginOutcome> {
        let user = match self.user_repository.find_by_username(username).await? {
            Some(user) => user,
            None => {
                tracing::info!(username = %username, "Login failed: unknown user");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let matches = bcrypt::verify(password, &user.password_hash).map_err(|e| {
            tracing::error!(username = %username, error = %e, "Stored password hash unusable");
            AuthError::PasswordCheckFailed
        })?;

        if !matches {
            tracing::info!(username = %username, "Login failed: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.active {
            tracing::warn!(username = %username, "Login refused: account disabled");
            return Err(AuthError::AccountDisabled.into());
        }

        let token = self.authority.issue(&user.username)?;

        tracing::info!(username = %user.username, "User logged in");
        Ok(LoginOutcome { user, token })
    }

    /// Revoke `token`; idempotent and accepts tokens that no longer validate
    pub fn logout(&self, token: &str) {
        self.authority.revoke(token);
    }

    /// Resolve the user a bearer token belongs to
    ///
    /// Every failure is `DomainError::Unauthorized`; the cause is logged at
    /// debug level only.
    pub async fn authenticate(&self, token: &str) -> DomainResult<AuthenticatedSession> {
        let subject = self.authority.extract_subject(token).map_err(|reason| {
            tracing::debug!(%reason, "Rejected token: undecodable");
            DomainError::Unauthorized
        })?;

        let user = match self.user_repository.find_by_username(&subject).await? {
            Some(user) if user.active => user,
            Some(_) => {
                tracing::debug!(subject = %subject, "Rejected token: account disabled");
                return Err(DomainError::Unauthorized);
            }
            None => {
                tracing::debug!(subject = %subject, "Rejected token: unknown subject");
                return Err(DomainError::Unauthorized);
            }
        };

        let claims = self.authority.check(token, &user.username).map_err(|reason| {
            tracing::debug!(subject = %subject, %reason, "Rejected token");
            DomainError::Unauthorized
        })?;

        Ok(AuthenticatedSession {
            user,
            expires_at: claims.expires_at(),
        })
    }
}
