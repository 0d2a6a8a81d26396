//! Utility modules for the gateway
//!
//! - **crypto**: HMAC signing and constant-time comparison
//! - **error**: Error handling

pub mod crypto;
pub mod error;

use std::time::{SystemTime, UNIX_EPOCH};

/// Get current wall-clock time in milliseconds since the Unix epoch
pub fn current_timestamp_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
