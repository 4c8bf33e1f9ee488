use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Connection settings for the price API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Scheme, host and port of the backend (e.g., "http://localhost:5000")
    pub api_base_url: String,

    /// Path of the price history endpoint
    pub history_path: String,

    /// Path of the prediction endpoint
    pub predict_path: String,

    /// Request timeout in milliseconds; requests never time out when unset
    pub request_timeout_ms: Option<u64>,

    /// Default tracing filter when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            history_path: "/api/prices/history".to_string(),
            predict_path: "/api/predict".to_string(),
            request_timeout_ms: None,
            log_filter: "agristock=info,frontend=info,compute=info".to_string(),
        }
    }
}

impl AppSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn history_url(&self) -> String {
        join_url(&self.api_base_url, &self.history_path)
    }

    pub fn predict_url(&self) -> String {
        join_url(&self.api_base_url, &self.predict_path)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
