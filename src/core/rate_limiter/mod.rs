//! Token-bucket rate limiting
//!
//! Admission control keyed by caller identity. Each caller gets a bucket
//! that starts full, drains one token per admitted request, and refills
//! continuously at a fixed rate up to the configured burst capacity.
//!
//! The limiter is an explicit owned structure constructed and injected by
//! the hosting layer; there is no global instance.

mod limiter;
mod types;
mod utils;


// Re-export public types
pub use limiter::RateLimiter;
pub use types::RateLimitDecision;
