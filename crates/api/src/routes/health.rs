//! Health check endpoint handler.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::app::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: DatabaseHealth,
}

/// Database health status.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseHealth {
    pub connected: bool,
    pub latency_ms: Option<u64>,
}

/// Health check endpoint: overall status plus database connectivity.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let start = std::time::Instant::now();
    let connected = sqlx::query("SELECT 1").execute(&state.pool).await.is_ok();
    let latency_ms = connected.then(|| start.elapsed().as_millis() as u64);

    let status = if connected { "ok" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: DatabaseHealth {
            connected,
            latency_ms,
        },
    })
}
