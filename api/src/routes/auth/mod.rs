//! Authentication route handlers
//!
//! This module contains the session endpoints:
//! - Login with username and password
//! - Logout, revoking the presented token
//! - Current session lookup behind the session guard

pub mod login;
pub mod logout;
pub mod session;

use std::sync::Arc;

use rcp_core::{AuthService, UserRepository};

/// Default JSON body limit in bytes
pub const DEFAULT_MAX_PAYLOAD_SIZE: usize = 64 * 1024;

/// Application state that holds shared services
pub struct AppState<U>
where
    U: UserRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub max_payload_size: usize,
}

impl<U> AppState<U>
where
    U: UserRepository,
{
    pub fn new(auth_service: Arc<AuthService<U>>) -> Self {
        Self {
            auth_service,
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
        }
    }

    pub fn with_max_payload_size(mut self, bytes: usize) -> Self {
        self.max_payload_size = bytes;
        self
    }
}
