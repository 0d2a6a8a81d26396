//! # studio-gateway
//!
//! Backend service for a marketing site: rate-limited chat proxying,
//! stateless signed admin sessions, and privacy-friendly page-view
//! analytics behind one HTTP surface.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use studio_gateway::{server, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! The core pieces are usable as a library too:
//!
//! ```rust,no_run
//! use studio_gateway::core::rate_limiter::RateLimiter;
//! use studio_gateway::config::RateLimitConfig;
//!
//! # async fn demo() -> studio_gateway::Result<()> {
//! let limiter = RateLimiter::new(RateLimitConfig::default())?;
//! if limiter.check("203.0.113.7").await {
//!     // handle the request
//! }
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::analytics::{Analytics, CounterStore, MemoryStore, PageViewStats};
pub use core::guardrails::{validate_messages, ChatMessage, GuardrailViolation};
pub use core::rate_limiter::{RateLimitDecision, RateLimiter};
pub use core::session::{SessionAuthenticator, SESSION_COOKIE_NAME};
pub use utils::error::{GatewayError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(NAME, env!("CARGO_PKG_NAME"));
    }
}
