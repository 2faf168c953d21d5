//! Authentication service module
//!
//! Use cases on top of the session authority:
//! - Username and password login issuing a session token
//! - Logout revoking the presented token
//! - Request authentication for protected routes

mod service;

#[cfg(test)]
mod tests;

pub use service::{AuthService, AuthenticatedSession, LoginOutcome};
