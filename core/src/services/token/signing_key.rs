//! Symmetric signing key for session tokens

use jsonwebtoken::{DecodingKey, EncodingKey};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::TokenError;

/// Key length in bytes, matching the HMAC-SHA256 output size
pub const SIGNING_KEY_LEN: usize = 32;

/// HMAC secret used to sign and verify tokens.
///
/// Generated once at process start and never persisted, so a restart
/// invalidates every outstanding token.
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKey {
    /// Generates a fresh 256-bit key from the operating system CSPRNG
    pub fn generate() -> Self {
        let mut bytes = [0u8; SIGNING_KEY_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self::from_material(&bytes)
    }

    /// Builds a key from caller-supplied material of at least
    /// [`SIGNING_KEY_LEN`] bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TokenError> {
        if bytes.len() < SIGNING_KEY_LEN {
            return Err(TokenError::WeakKey {
                len: bytes.len(),
                min: SIGNING_KEY_LEN,
            });
        }

        Ok(Self::from_material(bytes))
    }

    fn from_material(bytes: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
        }
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SigningKey([REDACTED])")
    }
}
