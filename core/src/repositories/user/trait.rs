//! User repository trait defining the lookups the login flow needs.
//!
//! Account creation and password management live outside this service;
//! the repository only answers who a username belongs to.

use async_trait::async_trait;

use crate::domain::entities::user::AuthUser;
use crate::errors::DomainError;

/// Repository trait for reading user accounts
///
/// Usernames are matched exactly (case-sensitive), the same comparison the
/// session authority applies to token subjects.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by username
    ///
    /// # Returns
    /// * `Ok(Some(AuthUser))` - User found
    /// * `Ok(None)` - No user with that username
    /// * `Err(DomainError)` - The backing store failed
    async fn find_by_username(&self, username: &str) -> Result<Option<AuthUser>, DomainError>;

    /// Check if a user exists with the given username
    async fn exists(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_username(username).await?.is_some())
    }
}
