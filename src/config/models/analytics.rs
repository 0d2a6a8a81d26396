//! Analytics configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Analytics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Enable page-view tracking and the stats endpoint
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
