use std::time::Duration;

use fakku_core::API_BASE;

/// HTTP client configuration
///
/// Defaults to the public API host and the HTTP client's own timeout behavior.
/// The command line fills it from `--base-url` / `FAKKU_API_BASE_URL` and
/// `--timeout` / `FAKKU_TIMEOUT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Whole-request timeout; `None` keeps the HTTP client default
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Apply CLI overrides to the configuration
    pub fn with_overrides(mut self, base_url: Option<String>, timeout: Option<u64>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(secs) = timeout {
            self.timeout = Some(Duration::from_secs(secs));
        }
        self
    }
}
