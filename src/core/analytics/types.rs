//! Analytics data types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single page view as seen by the tracking middleware
#[derive(Debug, Clone, Default)]
pub struct PageView {
    /// Request path, e.g. `/about`
    pub path: String,
    /// Two-letter country code, or `"unknown"`
    pub country: String,
    /// External referrer URL, if any
    pub referrer: Option<String>,
    /// Crawler name when the user agent matched a known bot
    pub bot: Option<String>,
    /// Browser family
    pub browser: Option<String>,
    /// Operating system family
    pub os: Option<String>,
    /// Device class (desktop, mobile, tablet)
    pub device: Option<String>,
}

/// Filters for the stats query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsQuery {
    /// Restrict to one page path
    pub path: Option<String>,
    /// Restrict to keys strictly after `today - days`
    pub days: Option<i64>,
}

/// Aggregated page-view statistics
///
/// Field names serialize in camelCase to stay compatible with the
/// dashboard's existing JSON contract.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageViewStats {
    pub total_views: u64,
    pub by_country: HashMap<String, u64>,
    pub by_path: HashMap<String, u64>,
    pub by_date: HashMap<String, u64>,
    pub bot_views: u64,
    pub by_bot: HashMap<String, u64>,
    pub by_referrer: HashMap<String, u64>,
    pub by_browser: HashMap<String, u64>,
    pub by_os: HashMap<String, u64>,
    pub by_device: HashMap<String, u64>,
}
