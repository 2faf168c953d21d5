//! Business services containing domain logic and use cases.

pub mod auth;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthenticatedSession, LoginOutcome};
pub use session::{
    Clock, ManualClock, RevocationSet, SessionAuthority, SessionAuthorityConfig, SystemClock,
};
pub use token::SigningKey;
