//! Configuration management for the gateway
//!
//! Configuration is read once at process start from environment variables
//! (a `.env` file is honored via dotenvy in `main`).

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{GatewayError, Result};
use std::env;
use tracing::{info, warn};

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Rate limiter configuration
    pub rate_limit: RateLimitConfig,
    /// Admin authentication configuration
    pub auth: AuthConfig,
    /// Analytics configuration
    pub analytics: AnalyticsConfig,
    /// Chat endpoint configuration
    pub chat: ChatConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let server = ServerConfig {
            host: env_or("GATEWAY_HOST", models::default_host()),
            port: parse_env("GATEWAY_PORT", models::default_port())?,
            production: env::var("GATEWAY_ENV").map(|v| v == "production").unwrap_or(false),
        };

        let rate_limit = RateLimitConfig {
            enabled: parse_env("RATE_LIMIT_ENABLED", true)?,
            capacity: parse_env("RATE_LIMIT_CAPACITY", models::default_capacity())?,
            fill_rate: parse_env("RATE_LIMIT_FILL_RATE", models::default_fill_rate())?,
        };

        let auth = AuthConfig {
            secret: AdminSecret::from_option(env::var("ADMIN_SECRET").ok()),
        };
        if !auth.secret.is_configured() {
            warn!(
                "ADMIN_SECRET is not set: admin login is disabled and session \
                 tokens will be signed with the fallback key"
            );
        }

        let analytics = AnalyticsConfig {
            enabled: parse_env("ANALYTICS_ENABLED", true)?,
        };

        let chat = ChatConfig {
            upstream_url: env::var("CHAT_UPSTREAM_URL").ok().filter(|v| !v.is_empty()),
        };

        let config = Self {
            server,
            rate_limit,
            auth,
            analytics,
            chat,
        };

        config.validate()?;
        Ok(config)
    }
}

fn env_or(key: &str, default: String) -> String {
    env::var(key).ok().filter(|v| !v.is_empty()).unwrap_or(default)
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(raw) if !raw.is_empty() => raw.parse().map_err(|_| {
            GatewayError::Config(format!("invalid value for {}: {:?}", key, raw))
        }),
        _ => Ok(default),
    }
}
