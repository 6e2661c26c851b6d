use serde::{Deserialize, Serialize};

/// HTTP settings for [`OpenGraphClient`](crate::OpenGraphClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenGraphConfig {
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Redirects followed before the request fails.
    pub max_redirects: usize,
}

impl Default for OpenGraphConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            max_redirects: 5,
        }
    }
}
