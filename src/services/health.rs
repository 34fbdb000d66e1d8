use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::database::store::Store;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub store: StoreHealth,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreHealth {
    pub backend: String,
    pub status: String,
    pub response_time_ms: u64,
}

impl StoreHealth {
    fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[derive(Clone)]
struct HealthState {
    store: Arc<dyn Store>,
    started_at: DateTime<Utc>,
}

/// Liveness, readiness and store status endpoints.
pub struct HealthService {
    pub router: Router,
}

impl HealthService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        let state = HealthState {
            store,
            started_at: Utc::now(),
        };

        let router = Router::new()
            .route("/health", get(health_check))
            .route("/health/ready", get(readiness_check))
            .route("/health/live", get(liveness_check))
            .with_state(state);

        Self { router }
    }
}

async fn check_store(store: &dyn Store) -> StoreHealth {
    let started = Instant::now();
    let status = match store.ping().await {
        Ok(()) => "healthy",
        Err(e) => {
            tracing::warn!("Store ping failed: {:#}", e);
            "unhealthy"
        }
    };

    StoreHealth {
        backend: store.backend_name().to_string(),
        status: status.to_string(),
        response_time_ms: started.elapsed().as_millis() as u64,
    }
}

async fn health_check(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let store = check_store(state.store.as_ref()).await;
    let now = Utc::now();

    let code = if store.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = HealthResponse {
        status: store.status.clone(),
        timestamp: now,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: (now - state.started_at).num_seconds().max(0) as u64,
        store,
    };
    (code, Json(body))
}

async fn readiness_check(State(state): State<HealthState>) -> Result<Json<&'static str>, StatusCode> {
    if check_store(state.store.as_ref()).await.is_healthy() {
        Ok(Json("ready"))
    } else {
        Err(StatusCode::SERVICE_UNAVAILABLE)
    }
}

async fn liveness_check() -> Json<&'static str> {
    Json("alive")
}
