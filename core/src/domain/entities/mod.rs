//! Domain entities representing core business objects.

pub mod token;
pub mod user;

pub use token::Claims;
pub use user::AuthUser;
