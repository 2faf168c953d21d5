mod concurrency_tests;

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use super::{ManualClock, SessionAuthority, SessionAuthorityConfig};
use crate::services::token::SigningKey;

/// 2023-11-14T22:13:20Z, a whole second
pub(super) const EPOCH: i64 = 1_700_000_000;

pub(super) fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

/// Authority with a fixed key, the given ttl and a manual clock at `EPOCH`
pub(super) fn authority_with_clock(ttl_secs: i64) -> (SessionAuthority, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(at(EPOCH)));
    let config = SessionAuthorityConfig::new(Duration::seconds(ttl_secs)).unwrap();
    let key = SigningKey::from_bytes(&[42u8; 32]).unwrap();

    (SessionAuthority::with_clock(key, config, clock.clone()), clock)
}
