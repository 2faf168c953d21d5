//! Token codec module
//!
//! Pure, stateless functions that turn a claim set into a signed compact
//! token and back:
//! - HS256 signing with a process-held [`SigningKey`]
//! - Signature verification on decode
//!
//! Decoding checks cryptographic validity only. Expiry, subject and
//! revocation are business checks owned by the session authority.

mod codec;
mod signing_key;


pub use codec::{decode, encode, ALGORITHM};
pub(crate) use codec::whole_seconds;
pub use signing_key::{SigningKey, SIGNING_KEY_LEN};
