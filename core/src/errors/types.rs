//! Error types for authentication and token handling
//!
//! The token taxonomy is detailed on purpose so failures can be logged
//! precisely; the HTTP layer collapses all of them into one unauthorized
//! response.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown username or wrong password; the two are not distinguished
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account disabled")]
    AccountDisabled,

    /// The stored password hash could not be checked (corrupt hash)
    #[error("Password verification failed")]
    PasswordCheckFailed,
}

/// Failures of cryptographic token validation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Not a three-segment token, bad base64, bad JSON, missing claims or an
    /// unexpected algorithm
    #[error("Malformed token")]
    Malformed,

    /// Signature does not match the header and payload under the current key
    #[error("Invalid signature")]
    BadSignature,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Issuing was asked for something it cannot sign
    #[error("Token encoding failed: {reason}")]
    Encoding { reason: String },

    /// Key material shorter than the HMAC-SHA256 block strength
    #[error("Signing key too short: {len} bytes (min {min})")]
    WeakKey { len: usize, min: usize },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Embedded subject differs from the asserted one
    #[error("Token subject mismatch")]
    SubjectMismatch,

    #[error("Token expired")]
    Expired,

    #[error("Token revoked")]
    Revoked,
}

impl TokenError {
    pub(crate) fn encoding(reason: impl Into<String>) -> Self {
        TokenError::Encoding {
            reason: reason.into(),
        }
    }
}
