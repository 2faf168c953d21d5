pub mod auth;

pub use auth::*;
pub use rcp_shared::{ApiResponse, ErrorResponse, HealthResponse};
