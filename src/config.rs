//! API endpoint configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "COURSEHUB_API_URL";

/// Base URL used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Where the REST API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme + host (+ optional prefix) without a trailing slash. Empty means
    /// same-origin relative requests.
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config from an explicit base URL, trimming trailing slashes.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    /// Load from `COURSEHUB_API_URL`, falling back to [`DEFAULT_API_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(&url),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    /// Join an absolute API path (`/api/...`) onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
