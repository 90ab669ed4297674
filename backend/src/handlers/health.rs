//! Health check endpoint
//!
//! Reports API liveness and whether the store behind the movement ledger
//! is reachable.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// Liveness probe with a store connectivity check
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    let database = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "connected",
        Err(_) => "disconnected",
    };

    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
