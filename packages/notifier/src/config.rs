//! Notifier configuration

use crate::error::{NotifierError, NotifierResult};
use std::time::Duration;

/// Environment variable holding the Slack incoming webhook URL
pub const WEBHOOK_URL_ENV: &str = "SLACK_WEBHOOK_URL";

/// Environment variable holding an optional request timeout in milliseconds
pub const TIMEOUT_ENV: &str = "SLACK_WEBHOOK_TIMEOUT_MS";

/// Configuration for a single notifier invocation
#[derive(Debug, Clone, Default)]
pub struct NotifierConfig {
    /// Slack incoming webhook URL. The secret token is part of the URL.
    pub webhook_url: Option<String>,
    /// Timeout for the webhook request. `None` leaves it to the HTTP client.
    pub timeout: Option<Duration>,
}

impl NotifierConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let webhook_url = lookup(WEBHOOK_URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let timeout = lookup(TIMEOUT_ENV)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);

        Self {
            webhook_url,
            timeout,
        }
    }

    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into().trim().to_string();
        self.webhook_url = if url.is_empty() { None } else { Some(url) };
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The configured webhook URL, or a configuration error if it is missing
    pub fn webhook_url(&self) -> NotifierResult<&str> {
        self.webhook_url
            .as_deref()
            .ok_or_else(|| NotifierError::Configuration(format!("{} not set", WEBHOOK_URL_ENV)))
    }
}
