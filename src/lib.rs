pub mod channels;
pub mod config;
pub mod error;
pub mod feed;
pub mod handler;
pub mod types;

pub use config::Config;

use self::error::RelayError;
use self::handler::MessagingHandler;
use self::types::{MessagingEvent, WebhookBatch};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub handler: Arc<dyn MessagingHandler>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyParams {
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// Builds the HTTP surface around an injected handler. The state is read-only
/// after construction; concurrent dispatch tasks share it without locking.
pub fn create_app(config: Config, handler: Arc<dyn MessagingHandler>) -> Router {
    let state = AppState { config, handler };

    Router::new()
        .route("/webhook", get(verify_webhook).post(receive_webhook))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Webhook ownership handshake: echo the challenge when the supplied token
/// matches the configured one, otherwise 401 with no body.
async fn verify_webhook(
    State(state): State<AppState>,
    Query(params): Query<VerifyParams>,
) -> Result<String, RelayError> {
    let expected = state.config.messenger.verify_token.as_deref();
    if expected.is_some() && params.verify_token.as_deref() == expected {
        Ok(params.challenge.unwrap_or_default())
    } else {
        Err(RelayError::Unauthorized)
    }
}

/// Decodes a webhook delivery and fans out one task per message-carrying
/// event. The 200 ack only confirms receipt: it is written without waiting on
/// any handler, and handler failures stay in the log.
async fn receive_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, RelayError> {
    let batch: WebhookBatch = serde_json::from_slice(&body)
        .map_err(|err| RelayError::MalformedRequest(err.to_string()))?;

    for event in dispatchable_events(batch) {
        let handler = state.handler.clone();
        tokio::spawn(async move {
            if let Err(err) = handler.handle(event).await {
                error!("messaging handler failed: {err}");
            }
        });
    }

    Ok(StatusCode::OK)
}

/// Events that reach the handler: those carrying a user message. Receipts and
/// postbacks arrive without one and are dropped here.
fn dispatchable_events(batch: WebhookBatch) -> impl Iterator<Item = MessagingEvent> {
    batch
        .entry
        .into_iter()
        .flat_map(|entry| entry.messaging)
        .filter(|event| event.message.is_some())
}
