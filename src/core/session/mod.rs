//! Stateless HMAC-signed admin sessions
//!
//! Sessions are self-verifying tokens of the form
//! `"<epoch-millis>:<uuid>:<base64url-hmac-sha256>"`. There is no session
//! store: validity is always recomputed from the token bytes and the clock,
//! so sessions survive process restarts and need no server-side cleanup.

mod authenticator;
mod token;


pub use authenticator::SessionAuthenticator;
pub use token::{SESSION_COOKIE_NAME, SESSION_EXPIRY_MS};
