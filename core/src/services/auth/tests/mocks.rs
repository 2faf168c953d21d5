//! Test doubles for the authentication service

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};

use crate::domain::entities::user::AuthUser;
use crate::errors::DomainError;
use crate::repositories::{InMemoryUserRepository, UserRepository};
use crate::services::auth::AuthService;
use crate::services::session::{ManualClock, SessionAuthority, SessionAuthorityConfig};
use crate::services::token::SigningKey;

pub const PASSWORD: &str = "correct horse battery staple";

/// Lowest bcrypt cost, keeps the suite fast
pub fn hash(password: &str) -> String {
    bcrypt::hash(password, 4).unwrap()
}

/// Repository whose backing store is always down
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn find_by_username(&self, _username: &str) -> Result<Option<AuthUser>, DomainError> {
        Err(DomainError::Internal {
            message: "user store unavailable".to_string(),
        })
    }
}

pub struct Fixture {
    pub service: AuthService<InMemoryUserRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub clock: Arc<ManualClock>,
}

/// Service with alice (active), bob (disabled) and a ttl of `ttl_secs`
pub fn fixture(ttl_secs: i64) -> Fixture {
    let mut bob = AuthUser::new("bob", hash(PASSWORD));
    bob.deactivate();

    let users = Arc::new(InMemoryUserRepository::with_users(vec![
        AuthUser::new("alice", hash(PASSWORD)).with_email("alice@example.com"),
        bob,
    ]));

    let clock = Arc::new(ManualClock::new(Utc.timestamp_opt(1_700_000_000, 0).unwrap()));
    let authority = Arc::new(SessionAuthority::with_clock(
        SigningKey::from_bytes(&[9u8; 32]).unwrap(),
        SessionAuthorityConfig::new(Duration::seconds(ttl_secs)).unwrap(),
        clock.clone(),
    ));

    Fixture {
        service: AuthService::new(users.clone(), authority),
        users,
        clock,
    }
}
