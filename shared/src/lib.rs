//! Shared configuration and wire types for the RecipeShare server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and loading
//! - Error response structures and error codes
//! - The response envelope returned by every endpoint

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, Environment, LogFormat, LoggingConfig, SeedUser, ServerConfig,
    SessionConfig, MAX_TOKEN_TTL_SECONDS,
};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
pub use types::{ApiResponse, HealthResponse};
