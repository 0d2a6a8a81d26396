//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::analytics::{Analytics, CounterStore, MemoryStore};
use crate::core::rate_limiter::RateLimiter;
use crate::core::session::SessionAuthenticator;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Chat admission control
    pub rate_limiter: Arc<RateLimiter>,
    /// Admin session issuance and verification
    pub sessions: SessionAuthenticator,
    /// Page-view analytics
    pub analytics: Analytics,
    /// Client for the chat upstream
    pub http: reqwest::Client,
}

impl AppState {
    /// Create a new AppState backed by the in-process counter store
    pub fn new(config: Config) -> Result<Self> {
        Self::with_store(config, Arc::new(MemoryStore::new()))
    }

    /// Create a new AppState over an explicit counter store
    pub fn with_store(config: Config, store: Arc<dyn CounterStore>) -> Result<Self> {
        let rate_limiter = Arc::new(RateLimiter::new(config.rate_limit.clone())?);
        let sessions = SessionAuthenticator::new(config.auth.secret.clone());
        let analytics = Analytics::new(store, config.analytics.enabled);

        Ok(Self {
            config: Arc::new(config),
            rate_limiter,
            sessions,
            analytics,
            http: reqwest::Client::new(),
        })
    }
}
