//! In-memory user store seeded from configuration

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::AuthUser;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// User repository backed by a map keyed on username
#[derive(Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, AuthUser>>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository holding `users`; later duplicates win
    pub fn with_users(users: impl IntoIterator<Item = AuthUser>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.username.clone(), user))
            .collect();

        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Insert a user, failing if the username is taken
    pub async fn insert(&self, user: AuthUser) -> Result<(), DomainError> {
        if user.username.is_empty() {
            return Err(DomainError::Validation {
                message: "Username must not be empty".to_string(),
            });
        }

        let mut users = self.users.write().await;

        if users.contains_key(&user.username) {
            return Err(DomainError::Validation {
                message: format!("Username '{}' already registered", user.username),
            });
        }

        users.insert(user.username.clone(), user);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<AuthUser>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }

    async fn exists(&self, username: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.contains_key(username))
    }
}
