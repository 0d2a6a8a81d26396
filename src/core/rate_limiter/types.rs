//! Rate limiter types and data structures

use std::time::Instant;

/// Outcome of an admission check
#[derive(Debug, Clone)]
pub struct RateLimitDecision {
    /// Whether the request is admitted
    pub allowed: bool,
    /// Whole tokens left in the bucket after this check
    pub remaining: u32,
    /// Seconds until the next token (only set when denied)
    pub retry_after_secs: Option<u64>,
}

/// Per-caller bucket state
///
/// Invariant: `0 <= tokens <= capacity`, enforced by clamping on refill.
#[derive(Debug, Clone)]
pub(super) struct Bucket {
    /// Current available admission credits
    pub(super) tokens: f64,
    /// Time of the last refill computation
    pub(super) last_refill: Instant,
}
