use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::Instrument;

use crate::bot::handlers::{BotHandler, UpdateOutcome};
use crate::bot::update::Update;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebhookResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl WebhookResponse {
    fn ok(message: &str) -> Self {
        Self {
            message: message.to_string(),
            error: None,
        }
    }

    fn failed(message: &str, error: String) -> Self {
        Self {
            message: message.to_string(),
            error: Some(error),
        }
    }
}

/// Receives Telegram updates pushed to the configured path.
pub struct WebhookService {
    pub router: Router,
}

impl WebhookService {
    pub fn new(handler: BotHandler, path: &str) -> Self {
        let router = Router::new()
            .route(path, post(receive_update))
            .with_state(handler);

        Self { router }
    }
}

async fn receive_update(
    State(handler): State<BotHandler>,
    body: Bytes,
) -> (StatusCode, Json<WebhookResponse>) {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("webhook", %request_id);

    async move {
        let update: Update = match serde_json::from_slice(&body) {
            Ok(update) => update,
            Err(e) => {
                tracing::warn!("Rejected webhook payload: {}", e);
                return (
                    StatusCode::BAD_REQUEST,
                    Json(WebhookResponse::failed("Invalid JSON payload", e.to_string())),
                );
            }
        };

        let update_id = update.update_id;
        match handler.handle_update(update).await {
            Ok(UpdateOutcome::Processed) => {
                tracing::debug!("Processed update {}", update_id);
                (
                    StatusCode::OK,
                    Json(WebhookResponse::ok("Message processed successfully")),
                )
            }
            Ok(UpdateOutcome::Ignored) => {
                tracing::debug!("Update {} carried nothing to process", update_id);
                (StatusCode::OK, Json(WebhookResponse::ok("No message to process")))
            }
            Err(e) => {
                tracing::error!("Failed to process update {}: {:#}", update_id, e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(WebhookResponse::failed("Internal Server Error", format!("{e:#}"))),
                )
            }
        }
    }
    .instrument(span)
    .await
}
