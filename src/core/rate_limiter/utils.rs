//! Eviction and introspection helpers for the rate limiter

use super::limiter::RateLimiter;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

impl RateLimiter {
    /// Drop buckets that have been idle long enough to refill completely.
    ///
    /// A full bucket carries no more information than no bucket at all, so
    /// evicting it cannot change any admission decision. This bounds the
    /// map instead of letting it grow with every caller identity ever seen.
    pub async fn cleanup(&self) {
        self.cleanup_at(Instant::now()).await;
    }

    pub(crate) async fn cleanup_at(&self, now: Instant) {
        let capacity = self.config.capacity as f64;
        let fill_rate = self.config.fill_rate;

        let mut buckets = self.buckets.write().await;
        let before = buckets.len();
        buckets.retain(|_, bucket| {
            let idle = now.saturating_duration_since(bucket.last_refill).as_secs_f64();
            bucket.tokens + idle * fill_rate < capacity
        });

        if buckets.len() < before {
            debug!(evicted = before - buckets.len(), "evicted idle rate limit buckets");
        }
    }

    /// Start a background task sweeping idle buckets once a minute
    pub fn start_cleanup_task(self: Arc<Self>) {
        let limiter = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(60));
            loop {
                interval.tick().await;
                limiter.cleanup().await;
            }
        });
    }

    /// Number of tracked callers
    pub async fn bucket_count(&self) -> usize {
        self.buckets.read().await.len()
    }

    /// Check if rate limiting is enabled
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Get the configured burst capacity
    pub fn capacity(&self) -> u32 {
        self.config.capacity
    }
}
