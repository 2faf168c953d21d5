//! Session guard middleware for protecting API endpoints.
//!
//! Extracts the bearer token from the Authorization header, resolves it to
//! an active user through the [`SessionAuthenticator`] registered in app
//! data, and injects an [`AuthContext`] into the request. Every rejection is
//! the same bare 401.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::{ErrorInternalServerError, InternalError},
    http::header::{HeaderMap, AUTHORIZATION},
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::future::LocalBoxFuture;
use rcp_core::{AuthService, AuthenticatedSession, DomainError, UserRepository};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::handlers::error::unauthorized_response;

const BEARER_PREFIX: &str = "Bearer ";

/// Caller identity injected into requests that passed the guard
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

impl From<AuthenticatedSession> for AuthContext {
    fn from(session: AuthenticatedSession) -> Self {
        Self {
            username: session.user.username,
            expires_at: session.expires_at,
        }
    }
}

/// Trait for wrapping the auth service to allow dynamic dispatch
#[async_trait]
pub trait SessionAuthenticator: Send + Sync {
    async fn authenticate(&self, token: &str) -> Result<AuthenticatedSession, DomainError>;
}

#[async_trait]
impl<U> SessionAuthenticator for AuthService<U>
where
    U: UserRepository + 'static,
{
    async fn authenticate(&self, token: &str) -> Result<AuthenticatedSession, DomainError> {
        AuthService::authenticate(self, token).await
    }
}

/// Session guard middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionGuard;

impl SessionGuard {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionGuardMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Session guard middleware service
pub struct SessionGuardMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let authenticator = match req.app_data::<web::Data<Arc<dyn SessionAuthenticator>>>() {
                Some(authenticator) => authenticator.clone(),
                None => {
                    tracing::error!("Session guard used without a SessionAuthenticator in app data");
                    return Err(ErrorInternalServerError("Authentication not configured"));
                }
            };

            let token = match extract_bearer_token(req.headers()) {
                Some(token) => token.to_string(),
                None => return Err(unauthorized()),
            };

            let session = match authenticator.authenticate(&token).await {
                Ok(session) => session,
                Err(_) => return Err(unauthorized()),
            };

            req.extensions_mut().insert(AuthContext::from(session));

            service.call(req).await
        })
    }
}

fn unauthorized() -> Error {
    InternalError::from_response("Unauthorized", unauthorized_response()).into()
}

/// Extracts a non-empty bearer token from the Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(unauthorized);

        ready(result)
    }
}
