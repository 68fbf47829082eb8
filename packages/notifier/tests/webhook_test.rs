//! End-to-end delivery through `ReqwestWebhookClient` against a local axum
//! server standing in for the Slack webhook.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use pipeline_notifier::{
    DeliveryError, HandlerResponse, Notifier, NotifierConfig, Outcome, ReqwestWebhookClient,
    SlackPayload, WebhookClient,
};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Received = Arc<Mutex<Vec<Value>>>;

async fn spawn_webhook(status: StatusCode, delay: Duration) -> (SocketAddr, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route(
            "/services/T000/B000/XXXX",
            post(move |State(received): State<Received>, Json(body): Json<Value>| async move {
                received.lock().unwrap().push(body);
                tokio::time::sleep(delay).await;
                (status, "ok")
            }),
        )
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, received)
}

fn webhook_url(addr: SocketAddr) -> String {
    format!("http://{}/services/T000/B000/XXXX", addr)
}

fn pipeline_event(state: &str, pipeline: &str) -> Value {
    json!({
        "source": "aws.codepipeline",
        "detail-type": "CodePipeline Pipeline Execution State Change",
        "detail": { "state": state, "pipeline": pipeline }
    })
}

#[tokio::test]
async fn test_delivers_exact_body() {
    let (addr, received) = spawn_webhook(StatusCode::OK, Duration::ZERO).await;
    let notifier = Notifier::new(ReqwestWebhookClient::new());
    let config = NotifierConfig::default().with_webhook_url(webhook_url(addr));

    let outcome = notifier
        .notify(&config, &pipeline_event("SUCCEEDED", "my-pipe"))
        .await
        .unwrap();
    assert!(matches!(outcome, Outcome::Delivered { .. }));

    let bodies = received.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        json!({
            "attachments": [{
                "color": "#00FF00",
                "title": "CodePipeline Success",
                "text": "Hurray! CodePipeline my-pipe succeeded."
            }]
        })
    );
}

#[tokio::test]
async fn test_service_unavailable_still_returns_200() {
    let (addr, received) = spawn_webhook(StatusCode::SERVICE_UNAVAILABLE, Duration::ZERO).await;
    let notifier = Notifier::new(ReqwestWebhookClient::new());
    let config = NotifierConfig::default().with_webhook_url(webhook_url(addr));

    let response = notifier
        .handle(&config, &pipeline_event("FAILED", "svc"))
        .await;

    assert_eq!(response, HandlerResponse::new(200, "Execution completed"));
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_client_reports_non_success_status() {
    let (addr, _received) = spawn_webhook(StatusCode::FORBIDDEN, Duration::ZERO).await;
    let client = ReqwestWebhookClient::new();
    let payload = SlackPayload::from(
        "STARTED"
            .parse::<pipeline_notifier::PipelineState>()
            .unwrap()
            .presentation("svc"),
    );

    let err = client
        .post_json(&webhook_url(addr), &payload, None)
        .await
        .unwrap_err();
    match err {
        DeliveryError::Status { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "ok");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_swallowed() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let notifier = Notifier::new(ReqwestWebhookClient::new());
    let config = NotifierConfig::default().with_webhook_url(webhook_url(addr));

    let outcome = notifier
        .notify(&config, &pipeline_event("STARTED", "svc"))
        .await
        .unwrap();
    assert!(matches!(outcome, Outcome::DeliveryFailed { .. }));

    let response = notifier
        .handle(&config, &pipeline_event("STARTED", "svc"))
        .await;
    assert_eq!(response.status_code, 200);
}

#[tokio::test]
async fn test_transport_failure_does_not_leak_webhook_token() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let notifier = Notifier::new(ReqwestWebhookClient::new());
    let config = NotifierConfig::default()
        .with_webhook_url(format!("http://{}/services/T000/B000/SECRETTOKEN", addr));

    let outcome = notifier
        .notify(&config, &pipeline_event("FAILED", "svc"))
        .await
        .unwrap();
    match outcome {
        Outcome::DeliveryFailed { reason, .. } => {
            assert!(reason.starts_with("Webhook request failed"));
            assert!(!reason.contains("SECRETTOKEN"), "{reason}");
            assert!(!reason.contains("/services/"), "{reason}");
        }
        other => panic!("expected delivery failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_is_swallowed() {
    let (addr, _received) = spawn_webhook(StatusCode::OK, Duration::from_secs(5)).await;
    let notifier = Notifier::new(ReqwestWebhookClient::new());
    let config = NotifierConfig::default()
        .with_webhook_url(webhook_url(addr))
        .with_timeout(Duration::from_millis(100));

    let outcome = notifier
        .notify(&config, &pipeline_event("SUPERSEDED", "svc"))
        .await
        .unwrap();
    match outcome {
        Outcome::DeliveryFailed { reason, .. } => {
            assert!(reason.starts_with("Webhook request failed"));
            assert!(!reason.contains("XXXX"), "{reason}");
        }
        other => panic!("expected delivery failure, got {other:?}"),
    }
}
