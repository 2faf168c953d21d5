//! Shared fixtures for API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use chrono::{Duration, Utc};
use rcp_api::routes::auth::AppState;
use rcp_core::{
    AuthService, AuthUser, InMemoryUserRepository, ManualClock, SessionAuthority,
    SessionAuthorityConfig, SigningKey,
};

pub const PASSWORD: &str = "tomato-basil-42";

pub struct TestContext {
    pub state: web::Data<AppState<InMemoryUserRepository>>,
    pub authority: Arc<SessionAuthority>,
    pub clock: Arc<ManualClock>,
}

/// App state with `alice` (active) and `bob` (disabled), tokens valid for `ttl_secs`
pub fn context(ttl_secs: i64) -> TestContext {
    let hash = bcrypt::hash(PASSWORD, 4).unwrap();
    let mut bob = AuthUser::new("bob", hash.clone());
    bob.deactivate();

    let users = InMemoryUserRepository::with_users(vec![
        AuthUser::new("alice", hash).with_email("alice@recipes.test"),
        bob,
    ]);

    let clock = Arc::new(ManualClock::new(Utc::now()));
    let authority = Arc::new(SessionAuthority::with_clock(
        SigningKey::generate(),
        SessionAuthorityConfig::new(Duration::seconds(ttl_secs)).unwrap(),
        clock.clone(),
    ));

    let auth_service = Arc::new(AuthService::new(Arc::new(users), authority.clone()));

    TestContext {
        state: web::Data::new(AppState::new(auth_service)),
        authority,
        clock,
    }
}

pub fn login_body(username: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "username": username, "password": password })
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Status of a service call whose middleware may reject with an error
pub fn status_of<B>(
    result: Result<actix_web::dev::ServiceResponse<B>, actix_web::Error>,
) -> actix_web::http::StatusCode {
    match result {
        Ok(resp) => resp.status(),
        Err(err) => err.error_response().status(),
    }
}
