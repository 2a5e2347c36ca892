//! # API Client Configuration
//!
//! Where the backend lives and how long we wait for it. Loaded once at
//! startup, then shared by every client in this crate.
//!
//! ## Environment Variables
//!
//! | Variable       | Default                     |
//! |----------------|-----------------------------|
//! | `DUKA_API_URL` | `http://localhost:5003/api` |

use std::env;
use std::time::Duration;

use crate::error::{ApiError, ApiResult};

/// Default backend base URL for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:5003/api";

/// Connection settings for the backend API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash.
    /// Example: `http://localhost:5003/api`
    pub base_url: String,

    /// How long to wait for the TCP connection to be established.
    pub connect_timeout: Duration,

    /// How long to wait for a complete response.
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let base_url = env::var("DUKA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Full URL for an API path. `path` must start with `/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Build the shared HTTP client from a config.
pub(crate) fn build_client(config: &ApiConfig) -> ApiResult<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {}", e)))
}

// =============================================================================
// Tests
// =============================================================================
