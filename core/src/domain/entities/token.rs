//! Claim set carried inside a session token.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Claims structure for the token payload.
///
/// Timestamps are Unix seconds (JWT NumericDate). Outside this crate a
/// `Claims` value can only be obtained by decoding a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    sub: String,

    /// Issued at timestamp
    iat: i64,

    /// Expiration timestamp
    exp: i64,
}

impl Claims {
    /// Builds claims for `subject` issued at `issued_at` and valid for `ttl`.
    ///
    /// Returns `None` when the expiry does not fit in a timestamp.
    pub(crate) fn new(subject: &str, issued_at: DateTime<Utc>, ttl: Duration) -> Option<Self> {
        let iat = issued_at.timestamp();
        let exp = iat.checked_add(ttl.num_seconds())?;

        Some(Self {
            sub: subject.to_string(),
            iat,
            exp,
        })
    }

    /// Builds claims from raw parts; used by tests to forge payloads.
    #[cfg(test)]
    pub(crate) fn from_parts(sub: &str, iat: i64, exp: i64) -> Self {
        Self {
            sub: sub.to_string(),
            iat,
            exp,
        }
    }

    pub fn subject(&self) -> &str {
        &self.sub
    }

    pub fn into_subject(self) -> String {
        self.sub
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        from_timestamp(self.iat)
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        from_timestamp(self.exp)
    }

    /// Checks if the claims have expired at `now`.
    ///
    /// The expiry instant itself is already expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

fn from_timestamp(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
