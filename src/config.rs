//! Configuration management and validation.
//!
//! Provides the configuration structure for the data fetch coordinator:
//! where the nearby-lookup service lives, how long to debounce location
//! churn, and how large a search radius to request.

use crate::constants::{
    DEFAULT_DEBOUNCE_WINDOW_MS, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SEARCH_RADIUS_KM,
    SERVER_URL_ENV_VAR,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Configuration for nearby facility lookups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Base URL of the nearby-lookup service (no trailing slash)
    pub base_url: String,

    /// Quiet period after the last location change before a lookup fires
    pub debounce_window_ms: u64,

    /// Search radius requested from the lookup service, in kilometers
    pub search_radius_km: f64,

    /// Remote request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            debounce_window_ms: DEFAULT_DEBOUNCE_WINDOW_MS,
            search_radius_km: DEFAULT_SEARCH_RADIUS_KM,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl FetchConfig {
    /// Create a configuration with defaults, honouring the server URL
    /// environment override when present
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(SERVER_URL_ENV_VAR) {
            debug!("Using server URL from environment: {}", url);
            config.base_url = url;
        }
        config
    }

    /// Debounce window as a [`Duration`]
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_window_ms)
    }

    /// Request timeout as a [`Duration`]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate configuration values for consistency and valid ranges
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::configuration("Base URL cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::configuration(format!(
                "Base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.search_radius_km <= 0.0 {
            return Err(Error::configuration(format!(
                "Search radius must be positive, got {}",
                self.search_radius_km
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(Error::configuration(
                "Request timeout must be at least one second",
            ));
        }

        Ok(())
    }
}
