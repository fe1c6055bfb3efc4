//! Backend connection settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend API (e.g. `http://192.168.0.104:5000`).
    pub base_url: String,
    /// Per-request timeout, covering connect, send and body read.
    pub request_timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://192.168.0.104:5000".to_string(),
            request_timeout_ms: 5_000,
        }
    }
}

impl BackendConfig {
    /// Creates a config for `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Base URL without trailing slashes.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
