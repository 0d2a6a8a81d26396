//! Chat endpoint configuration

use serde::{Deserialize, Serialize};

/// Chat endpoint configuration
///
/// The gateway does not talk to a model itself; it validates and
/// rate-limits, then forwards the request body to the configured upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Upstream completion endpoint; when unset the chat route answers 503
    pub upstream_url: Option<String>,
}
