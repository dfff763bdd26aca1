use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollingConfig {
    /// Seconds between two suppression fetches
    #[serde(default = "default_interval")]
    pub interval: u64,

    /// Initial watermark (Unix seconds); startup time when unset
    #[serde(default)]
    pub last_timestamp: Option<i64>,

    /// Per-request HTTP timeout in seconds; client default when unset
    #[serde(default)]
    pub request_timeout: Option<u64>,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
            last_timestamp: None,
            request_timeout: None,
        }
    }
}

fn default_interval() -> u64 {
    5
}
