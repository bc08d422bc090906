use std::default::Default;
use std::time::Duration;

/// Contains Config properties which will be used by the engine
#[derive(Clone)]
pub struct ClientConfig {
    /// Interval between checkpoint-discovery retries
    pub discovery_retry_interval: Duration,
    /// Number of scheduled retries after the initial discovery request
    /// before the session is reported as having no agent connected
    pub discovery_retry_limit: u8,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            discovery_retry_interval: Duration::from_millis(3000),
            discovery_retry_limit: 5,
        }
    }
}
