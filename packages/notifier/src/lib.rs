//! Pipeline Notifier - CodePipeline state changes to Slack webhook messages
//!
//! This crate turns a CodePipeline "Pipeline Execution State Change" event
//! into a Slack attachment and posts it to an incoming webhook. Delivery is
//! best effort: one attempt, failures are logged and never surfaced to the
//! caller.
//!
//! ## States
//!
//! | State | Title | Color |
//! |-------|-------|-------|
//! | SUCCEEDED | CodePipeline Success | `#00FF00` |
//! | FAILED | CodePipeline Failure | `#FF0000` |
//! | RESUMED | CodePipeline Resumed | `#FFA500` |
//! | STARTED | CodePipeline Started | `#87CEEB` |
//! | SUPERSEDED | CodePipeline Superseded | `#D3D3D3` |
//! | CANCELED | CodePipeline Canceled | `#FFA07A` |
//!
//! Any other state, or any event that is not a CodePipeline execution state
//! change, is acknowledged without sending anything.

mod config;
mod error;
mod event;
mod handler;
mod payload;
mod state;

pub mod webhook;

pub use config::{NotifierConfig, TIMEOUT_ENV, WEBHOOK_URL_ENV};
pub use error::{DeliveryError, DeliveryResult, NotifierError, NotifierResult};
pub use event::{PIPELINE_DETAIL_TYPE, PIPELINE_SOURCE, PipelineEvent};
pub use handler::{HandlerResponse, Notifier, Outcome};
pub use payload::{Attachment, SlackPayload};
pub use state::{PipelineState, Presentation};
pub use webhook::{ReqwestWebhookClient, WebhookClient};
