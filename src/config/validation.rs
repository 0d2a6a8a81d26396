//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

use super::models::*;
use super::Config;
use crate::utils::error::{GatewayError, Result};
use tracing::debug;

/// Validation trait for configuration structures
pub trait Validate {
    /// Validate the configuration, returning a configuration error on the
    /// first violation found.
    fn validate(&self) -> Result<()>;
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(GatewayError::Config("server host cannot be empty".into()));
        }
        if self.port == 0 {
            return Err(GatewayError::Config("server port cannot be 0".into()));
        }
        Ok(())
    }
}

impl Validate for RateLimitConfig {
    fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(GatewayError::Config(
                "rate limit capacity must be greater than 0".into(),
            ));
        }
        if !(self.fill_rate > 0.0) {
            return Err(GatewayError::Config(
                "rate limit fill_rate must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

impl Validate for ChatConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.upstream_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(GatewayError::Config(format!(
                    "chat upstream_url must be an http(s) URL, got: {}",
                    url
                )));
            }
        }
        Ok(())
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.rate_limit.validate()?;
        self.chat.validate()?;
        debug!("Configuration validated");
        Ok(())
    }
}
