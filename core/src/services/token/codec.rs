//! Compact signed token encoding and decoding

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::{DecodeError, TokenError};

use super::signing_key::SigningKey;

/// Signing algorithm declared in every token header
pub const ALGORITHM: Algorithm = Algorithm::HS256;

/// Encodes a claim set for `subject` into a signed `header.payload.signature`
/// token.
///
/// Deterministic for identical inputs. Fails only on input the issuer should
/// never pass: an empty subject, a ttl that is not a positive whole number of
/// seconds, or an expiry that does not fit in a timestamp.
pub fn encode(
    subject: &str,
    issued_at: DateTime<Utc>,
    ttl: Duration,
    key: &SigningKey,
) -> Result<String, TokenError> {
    if subject.is_empty() {
        return Err(TokenError::encoding("subject must not be empty"));
    }
    if whole_seconds(ttl).is_none() {
        return Err(TokenError::encoding("ttl must be a positive whole number of seconds"));
    }

    let claims = Claims::new(subject, issued_at, ttl)
        .ok_or_else(|| TokenError::encoding("expiry overflows timestamp"))?;

    jsonwebtoken::encode(&Header::new(ALGORITHM), &claims, key.encoding_key())
        .map_err(|e| TokenError::encoding(e.to_string()))
}

/// Returns the ttl in seconds when it is at least one second and has no
/// fractional part. Claims carry whole seconds only.
pub(crate) fn whole_seconds(ttl: Duration) -> Option<i64> {
    let seconds = ttl.num_seconds();
    (seconds >= 1 && Duration::try_seconds(seconds) == Some(ttl)).then_some(seconds)
}

/// Decodes `token` and verifies its signature against `key`.
///
/// Expiry is not checked here.
pub fn decode(token: &str, key: &SigningKey) -> Result<Claims, DecodeError> {
    jsonwebtoken::decode::<Claims>(token, key.decoding_key(), &signature_only_validation())
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature => DecodeError::BadSignature,
            _ => DecodeError::Malformed,
        })
}

fn signature_only_validation() -> Validation {
    let mut validation = Validation::new(ALGORITHM);
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.validate_aud = false;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["sub", "exp"]);
    validation
}
