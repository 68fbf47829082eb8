//! Error types for the notifier

/// Result type for notifier operations
pub type NotifierResult<T> = Result<T, NotifierError>;

/// Result type for a single webhook delivery attempt
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Errors that abort an invocation
#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Errors from a webhook delivery attempt.
///
/// These are reported by [`crate::WebhookClient`] implementations and are
/// absorbed by the notifier, which only logs them.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("Webhook returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection, DNS or timeout failure. Built with the URL stripped.
    #[error("Webhook request failed: {0}")]
    Transport(reqwest::Error),
}

impl DeliveryError {
    /// HTTP status returned by the webhook, if the request got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
