//! # RecipeShare Core
//!
//! Session token lifecycle and authentication use cases for the RecipeShare
//! backend. The crate is organised leaves first:
//!
//! - [`services::token`] - stateless token codec (encode, decode, verify)
//! - [`services::session`] - the session authority holding the signing key
//!   and the revocation set
//! - [`services::auth`] - login, logout and request authentication built on
//!   the authority and a [`repositories::UserRepository`]

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
