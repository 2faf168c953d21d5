//! Session authority module
//!
//! Stateful half of the token lifecycle:
//! - Holds the process signing key and the configured token ttl
//! - Issues tokens and extracts their claims
//! - Tracks explicitly revoked tokens (logout) until process exit
//! - Answers the single authorization question every protected route asks

mod authority;
mod clock;
mod config;
mod revocation;

#[cfg(test)]
mod tests;

pub use authority::SessionAuthority;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::SessionAuthorityConfig;
pub use revocation::RevocationSet;
