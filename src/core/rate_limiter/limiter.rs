//! Core rate limiter implementation

use super::types::{Bucket, RateLimitDecision};
use crate::config::{RateLimitConfig, Validate};
use crate::utils::error::Result;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::debug;

/// Token-bucket rate limiter keyed by caller identity
pub struct RateLimiter {
    /// Rate limit configuration
    pub(super) config: RateLimitConfig,
    /// Buckets by caller id (IP or similar opaque string)
    pub(super) buckets: Arc<RwLock<HashMap<String, Bucket>>>,
}

impl RateLimiter {
    /// Create a new rate limiter
    ///
    /// Rejects a capacity of 0 or a non-positive fill rate.
    pub fn new(config: RateLimitConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            buckets: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    /// Check whether one unit of work from `caller_id` may proceed,
    /// consuming a token when it may.
    ///
    /// Denial is a normal `false`, never an error.
    pub async fn check(&self, caller_id: &str) -> bool {
        self.check_detailed(caller_id).await.allowed
    }

    /// Like [`check`](Self::check), but with decision metadata for
    /// `Retry-After` headers.
    pub async fn check_detailed(&self, caller_id: &str) -> RateLimitDecision {
        self.check_at(caller_id, Instant::now()).await
    }

    /// Admission check against an explicit clock reading. The refill,
    /// clamp, and consume steps all happen under a single write lock.
    pub(crate) async fn check_at(&self, caller_id: &str, now: Instant) -> RateLimitDecision {
        if !self.config.enabled {
            return RateLimitDecision {
                allowed: true,
                remaining: self.config.capacity,
                retry_after_secs: None,
            };
        }

        let capacity = self.config.capacity as f64;
        let mut buckets = self.buckets.write().await;
        // A fresh bucket starts full: new callers get the whole burst
        let bucket = buckets.entry(caller_id.to_string()).or_insert_with(|| Bucket {
            tokens: capacity,
            last_refill: now,
        });

        // Refill continuously, clamped at capacity
        let elapsed = now.saturating_duration_since(bucket.last_refill);
        bucket.tokens = (bucket.tokens + elapsed.as_secs_f64() * self.config.fill_rate)
            .min(capacity);
        bucket.last_refill = now;

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            RateLimitDecision {
                allowed: true,
                remaining: bucket.tokens as u32,
                retry_after_secs: None,
            }
        } else {
            debug!(caller = caller_id, tokens = bucket.tokens, "rate limit exceeded");
            let retry = ((1.0 - bucket.tokens) / self.config.fill_rate).ceil() as u64;
            RateLimitDecision {
                allowed: false,
                remaining: 0,
                retry_after_secs: Some(retry.max(1)),
            }
        }
    }
}

impl Clone for RateLimiter {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            buckets: self.buckets.clone(),
        }
    }
}
