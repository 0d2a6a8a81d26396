//! Core gateway functionality

pub mod analytics;
pub mod guardrails;
pub mod rate_limiter;
pub mod session;
