//! Unit tests for authentication service

use std::sync::Arc;

use chrono::Duration;

use crate::domain::entities::user::AuthUser;
use crate::errors::{AuthError, DomainError};
use crate::services::auth::AuthService;
use crate::services::session::{SessionAuthority, SessionAuthorityConfig};
use crate::services::token::SigningKey;

use super::mocks::*;

#[tokio::test]
async fn test_login_issues_valid_token() {
    let f = fixture(3600);

    let outcome = f.service.login("alice", PASSWORD).await.unwrap();

    assert_eq!(outcome.user.username, "alice");
    assert_eq!(outcome.user.email.as_deref(), Some("alice@example.com"));
    assert!(f.service.authority().is_valid(&outcome.token, "alice"));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let f = fixture(3600);

    let result = f.service.login("alice", "nope").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_login_unknown_user_is_indistinguishable() {
    let f = fixture(3600);

    let unknown = f.service.login("mallory", PASSWORD).await.unwrap_err();
    let wrong = f.service.login("alice", "nope").await.unwrap_err();

    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[tokio::test]
async fn test_login_username_is_case_sensitive() {
    let f = fixture(3600);

    assert!(f.service.login("Alice", PASSWORD).await.is_err());
}

#[tokio::test]
async fn test_login_disabled_account() {
    let f = fixture(3600);

    let result = f.service.login("bob", PASSWORD).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::AccountDisabled))
    ));

    // status is not revealed without the right password
    let result = f.service.login("bob", "nope").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_login_corrupt_hash() {
    let f = fixture(3600);
    f.users
        .insert(AuthUser::new("carol", "not-a-bcrypt-hash"))
        .await
        .unwrap();

    let result = f.service.login("carol", PASSWORD).await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::PasswordCheckFailed))
    ));
}

#[tokio::test]
async fn test_login_repository_failure_propagates() {
    let authority = Arc::new(SessionAuthority::new(
        SigningKey::generate(),
        SessionAuthorityConfig::default(),
    ));
    let service = AuthService::new(Arc::new(FailingUserRepository), authority);

    let result = service.login("alice", PASSWORD).await;

    assert!(matches!(result, Err(DomainError::Internal { .. })));
}

#[tokio::test]
async fn test_authenticate_returns_user_and_expiry() {
    let f = fixture(600);
    let token = f.service.login("alice", PASSWORD).await.unwrap().token;

    let session = f.service.authenticate(&token).await.unwrap();

    assert_eq!(session.user.username, "alice");
    assert_eq!(
        session.expires_at,
        f.service.authority().extract_expiry(&token).unwrap()
    );
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let f = fixture(3600);
    let token = f.service.login("alice", PASSWORD).await.unwrap().token;

    f.service.logout(&token);
    f.service.logout(&token);

    assert!(matches!(
        f.service.authenticate(&token).await,
        Err(DomainError::Unauthorized)
    ));
    assert_eq!(f.service.authority().revoked_count(), 1);
}

#[tokio::test]
async fn test_logout_accepts_invalid_token() {
    let f = fixture(3600);

    f.service.logout("garbage");

    assert!(f.service.authority().is_revoked("garbage"));
}

#[tokio::test]
async fn test_authenticate_expired_token() {
    let f = fixture(60);
    let token = f.service.login("alice", PASSWORD).await.unwrap().token;

    f.clock.advance(Duration::seconds(60));

    assert!(matches!(
        f.service.authenticate(&token).await,
        Err(DomainError::Unauthorized)
    ));
}

#[tokio::test]
async fn test_authenticate_garbage_token() {
    let f = fixture(60);

    assert!(matches!(
        f.service.authenticate("not.a.token").await,
        Err(DomainError::Unauthorized)
    ));
}

#[tokio::test]
async fn test_authenticate_token_for_unknown_subject() {
    let f = fixture(60);
    let token = f.service.authority().issue("ghost").unwrap();

    assert!(matches!(
        f.service.authenticate(&token).await,
        Err(DomainError::Unauthorized)
    ));
}

#[tokio::test]
async fn test_authenticate_token_for_disabled_subject() {
    let f = fixture(60);
    let token = f.service.authority().issue("bob").unwrap();

    assert!(f.service.authenticate(&token).await.is_err());
}

#[tokio::test]
async fn test_relogin_after_logout_gets_working_token() {
    let f = fixture(3600);
    let first = f.service.login("alice", PASSWORD).await.unwrap().token;
    f.service.logout(&first);

    // a new second so the fresh token differs from the revoked one
    f.clock.advance(Duration::seconds(1));
    let second = f.service.login("alice", PASSWORD).await.unwrap().token;

    assert_ne!(first, second);
    assert!(f.service.authenticate(&second).await.is_ok());
    assert!(f.service.authenticate(&first).await.is_err());
}
