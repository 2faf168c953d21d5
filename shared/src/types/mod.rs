//! Wire types shared by the API layer
//!
//! - `response` - Response envelope and health check body

pub mod response;

pub use response::{ApiResponse, HealthResponse};
