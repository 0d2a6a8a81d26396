//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

pub mod analytics;
pub mod auth;
pub mod chat;
pub mod rate_limit;
pub mod server;

// Re-export all configuration types
pub use analytics::*;
pub use auth::*;
pub use chat::*;
pub use rate_limit::*;
pub use server::*;

/// Default server host
pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default bucket capacity (maximum burst size)
pub fn default_capacity() -> u32 {
    10
}

/// Default fill rate in tokens per second (1 request per 10 seconds)
pub fn default_fill_rate() -> f64 {
    0.1
}

pub fn default_true() -> bool {
    true
}
