//! The notifier: event in, at most one webhook post out

use crate::config::NotifierConfig;
use crate::error::{NotifierError, NotifierResult};
use crate::event::PipelineEvent;
use crate::payload::SlackPayload;
use crate::state::PipelineState;
use crate::webhook::{ReqwestWebhookClient, WebhookClient};
use serde::Serialize;
use serde_json::Value;

const BODY_COMPLETED: &str = "Execution completed";
const BODY_IRRELEVANT_STATE: &str = "Not a relevant pipeline state";
const BODY_MISSING_WEBHOOK: &str = "Slack webhook URL missing";

/// What a single invocation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The webhook accepted the notification
    Delivered {
        state: PipelineState,
        pipeline: String,
    },
    /// The webhook post was attempted and failed. Logged, not retried.
    DeliveryFailed {
        state: PipelineState,
        pipeline: String,
        reason: String,
    },
    /// Not a CodePipeline execution state change
    Filtered,
    /// A pipeline event whose state has no notification
    UnrecognizedState(Option<String>),
}

/// Lambda-style response: `{"statusCode": 200, "body": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }
}

impl From<&Outcome> for HandlerResponse {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::UnrecognizedState(_) => Self::new(200, BODY_IRRELEVANT_STATE),
            Outcome::Delivered { .. } | Outcome::DeliveryFailed { .. } | Outcome::Filtered => {
                Self::new(200, BODY_COMPLETED)
            }
        }
    }
}

impl From<&NotifierError> for HandlerResponse {
    fn from(error: &NotifierError) -> Self {
        match error {
            NotifierError::Configuration(_) => Self::new(500, BODY_MISSING_WEBHOOK),
        }
    }
}

/// Sends CodePipeline state changes to a Slack webhook.
///
/// Holds no per-invocation state. Configuration is passed to every call so
/// it can be re-read from the environment on each invocation.
#[derive(Debug, Clone, Default)]
pub struct Notifier<C: WebhookClient = ReqwestWebhookClient> {
    client: C,
}

impl<C: WebhookClient> Notifier<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Handle one event and map the result to a status code and body
    pub async fn handle(&self, config: &NotifierConfig, event: &Value) -> HandlerResponse {
        match self.notify(config, event).await {
            Ok(outcome) => HandlerResponse::from(&outcome),
            Err(e) => HandlerResponse::from(&e),
        }
    }

    /// Handle one event.
    ///
    /// Only a missing webhook URL is an error. Filtered events, unknown
    /// states and failed deliveries are all reported as an [`Outcome`].
    pub async fn notify(&self, config: &NotifierConfig, event: &Value) -> NotifierResult<Outcome> {
        let webhook_url = match config.webhook_url() {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(error = %e, "Slack webhook URL not found");
                return Err(e);
            }
        };

        tracing::debug!(event = %event, "Event received");

        let event = PipelineEvent::from_value(event);
        if !event.is_pipeline_state_change() {
            tracing::info!(
                source = ?event.source,
                detail_type = ?event.detail_type,
                "Event source is not CodePipeline or detail-type is not relevant"
            );
            return Ok(Outcome::Filtered);
        }

        let parsed = event
            .state
            .as_deref()
            .and_then(|s| s.parse::<PipelineState>().ok());
        let state = match parsed {
            Some(state) => state,
            None => {
                tracing::info!(state = ?event.state, "Pipeline state not relevant");
                return Ok(Outcome::UnrecognizedState(event.state));
            }
        };

        let pipeline = event.pipeline.unwrap_or_default();
        let payload = SlackPayload::from(state.presentation(&pipeline));

        match self
            .client
            .post_json(webhook_url, &payload, config.timeout)
            .await
        {
            Ok(status) => {
                tracing::info!(
                    pipeline = %pipeline,
                    state = %state,
                    status,
                    "Slack notification sent"
                );
                Ok(Outcome::Delivered { state, pipeline })
            }
            Err(e) => {
                tracing::error!(
                    pipeline = %pipeline,
                    state = %state,
                    status = ?e.status(),
                    error = %e,
                    "Failed to send Slack notification"
                );
                Ok(Outcome::DeliveryFailed {
                    state,
                    pipeline,
                    reason: e.to_string(),
                })
            }
        }
    }
}
