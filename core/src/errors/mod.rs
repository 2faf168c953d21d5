//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, DecodeError, TokenError};

use rcp_shared::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl IntoErrorResponse for DomainError {
    /// Token failures are reported as a bare `UNAUTHORIZED`; clients never
    /// learn which check rejected them.
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            DomainError::Validation { message } => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone())
            }
            DomainError::Unauthorized | DomainError::Token(_) => {
                ErrorResponse::new(error_codes::UNAUTHORIZED, "Unauthorized")
            }
            DomainError::Auth(AuthError::InvalidCredentials) => {
                ErrorResponse::new(error_codes::INVALID_CREDENTIALS, "Invalid credentials")
            }
            DomainError::Auth(AuthError::AccountDisabled) => {
                ErrorResponse::new(error_codes::ACCOUNT_DISABLED, "Account is disabled")
            }
            DomainError::Auth(AuthError::PasswordCheckFailed) | DomainError::Internal { .. } => {
                ErrorResponse::new(
                    error_codes::INTERNAL_ERROR,
                    "An error occurred while processing the request",
                )
            }
        }
    }
}
