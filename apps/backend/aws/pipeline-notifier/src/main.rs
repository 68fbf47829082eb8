//! AWS Lambda CodePipeline Notifier
//!
//! Invoked by an EventBridge rule on CodePipeline execution state changes
//! and posts a colored attachment to the Slack webhook in
//! `SLACK_WEBHOOK_URL`.
//!
//! ## Environment
//!
//! - `SLACK_WEBHOOK_URL` - incoming webhook URL (required)
//! - `SLACK_WEBHOOK_TIMEOUT_MS` - webhook request timeout (optional)
//! - `SENTRY_ENDPOINT` - report delivery failures to Sentry (optional)
//! - `RUST_LOG` - log filter, defaults to `info`

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use pipeline_notifier::{
    HandlerResponse, Notifier, NotifierConfig, ReqwestWebhookClient, WebhookClient,
};
use serde_json::Value;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str =
    "info,hyper=warn,hyper_util=warn,rustls=warn,h2=warn,tower=warn,reqwest=warn";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    let sentry_endpoint = std::env::var("SENTRY_ENDPOINT").unwrap_or_default();

    // RUST_LOG wins; otherwise keep our own events at info and quiet the HTTP stack
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _sentry_guard = if sentry_endpoint.is_empty() {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
            .init();
        None
    } else {
        // Delivery failures are logged at error level and become Sentry events
        let guard = sentry::init((
            sentry_endpoint,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                traces_sample_rate: 0.3,
                ..Default::default()
            },
        ));
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
            .with(sentry_tracing::layer())
            .init();
        Some(guard)
    };

    let notifier = Notifier::new(ReqwestWebhookClient::new());
    let notifier = &notifier;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        // Read per invocation so a rotated webhook secret is picked up
        let config = NotifierConfig::from_env();
        pipeline_notifier_handler(notifier, &config, event).await
    }))
    .await
}

pub async fn pipeline_notifier_handler<C: WebhookClient>(
    notifier: &Notifier<C>,
    config: &NotifierConfig,
    event: LambdaEvent<Value>,
) -> Result<HandlerResponse, Error> {
    let LambdaEvent { payload, context } = event;
    tracing::debug!(request_id = %context.request_id, "Handling invocation");

    let response = notifier.handle(config, &payload).await;

    tracing::info!(
        request_id = %context.request_id,
        status_code = response.status_code,
        body = %response.body,
        "Invocation finished"
    );
    Ok(response)
}
