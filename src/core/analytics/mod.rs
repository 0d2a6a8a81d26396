//! Privacy-friendly page-view analytics
//!
//! Counts live in an opaque counter store under hour-granular keys like
//! `pv:2024-12-04-14:/about:IT`; no IP addresses or visitor identifiers are
//! ever stored. Aggregation happens at read time by scanning and parsing
//! the keys, so the store needs nothing beyond increment, multi-get, and a
//! prefix scan.
//!
//! Tracking is fire-and-forget: every failure is swallowed after logging,
//! analytics must never break the site.

mod bots;
mod keys;
mod store;
mod tracker;
mod types;

#[cfg(test)]
mod tests;

pub use bots::detect_bot;
pub use store::{CounterStore, MemoryStore};
pub use tracker::Analytics;
pub use types::{PageView, PageViewStats, StatsQuery};
