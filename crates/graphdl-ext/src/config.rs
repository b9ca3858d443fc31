//! Extension configuration.

use std::time::Duration;
use url::Url;

use crate::cancel::RESET_DELAY;

/// Configuration for the cancel transport and controller timing.
#[derive(Clone, Debug)]
pub struct CancelClientConfig {
    /// Base URL of the host editor's API server.
    pub base_url: Url,
    /// How long a transient completion label stays up before reset.
    pub reset_delay: Duration,
}

impl CancelClientConfig {
    /// Default address of the editor backend.
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:8188";

    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Set the label reset delay.
    #[must_use]
    pub const fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }
}

impl Default for CancelClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(Self::DEFAULT_BASE_URL).expect("default URL is valid"),
            reset_delay: RESET_DELAY,
        }
    }
}
