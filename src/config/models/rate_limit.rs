//! Rate limiting configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Token-bucket rate limiting configuration
///
/// Immutable for the lifetime of a limiter instance. With the defaults a
/// caller gets a burst of 10 requests, then 1 request per 10 seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Maximum burst size (max tokens held by a bucket)
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    /// Tokens replenished per second
    #[serde(default = "default_fill_rate")]
    pub fill_rate: f64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: default_capacity(),
            fill_rate: default_fill_rate(),
        }
    }
}
