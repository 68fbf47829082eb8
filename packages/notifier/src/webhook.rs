//! Webhook delivery

use crate::error::{DeliveryError, DeliveryResult};
use crate::payload::SlackPayload;
use std::time::Duration;

/// Posts a payload to a webhook URL.
///
/// Implementations make exactly one attempt. A non-2xx response is an error.
#[async_trait::async_trait]
pub trait WebhookClient: Send + Sync {
    /// Post `payload` as JSON, returning the response status on success
    async fn post_json(
        &self,
        url: &str,
        payload: &SlackPayload,
        timeout: Option<Duration>,
    ) -> DeliveryResult<u16>;
}

/// [`WebhookClient`] backed by `reqwest`
#[derive(Debug, Clone, Default)]
pub struct ReqwestWebhookClient {
    client: reqwest::Client,
}

impl ReqwestWebhookClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl WebhookClient for ReqwestWebhookClient {
    async fn post_json(
        &self,
        url: &str,
        payload: &SlackPayload,
        timeout: Option<Duration>,
    ) -> DeliveryResult<u16> {
        let mut request = self.client.post(url).json(payload);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        // The webhook URL carries the secret token, keep it out of errors
        let response = request
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.without_url()))?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(status.as_u16())
    }
}
