//! HTTP handlers for outbound movement endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::services::retirada::{Retirada, RetiradaInput, RetiradaService};
use crate::AppState;

/// List all outbound movements
pub async fn list_retiradas(State(state): State<AppState>) -> AppResult<Json<Vec<Retirada>>> {
    let service = RetiradaService::new(state.db);
    let retiradas = service.get_retiradas().await?;
    Ok(Json(retiradas))
}

/// Get an outbound movement by id
pub async fn get_retirada(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Retirada>> {
    let service = RetiradaService::new(state.db);
    let retirada = service.get_retirada(id).await?;
    Ok(Json(retirada))
}

/// Record a new outbound movement (400 when stock is insufficient)
pub async fn create_retirada(
    State(state): State<AppState>,
    Json(input): Json<RetiradaInput>,
) -> AppResult<(StatusCode, Json<Retirada>)> {
    let service = RetiradaService::new(state.db);
    let retirada = service.create_retirada(input).await?;
    Ok((StatusCode::CREATED, Json(retirada)))
}

/// Replace an existing outbound movement
pub async fn update_retirada(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<RetiradaInput>,
) -> AppResult<Json<Retirada>> {
    let service = RetiradaService::new(state.db);
    let retirada = service.update_retirada(id, input).await?;
    Ok(Json(retirada))
}

/// Delete an outbound movement
pub async fn delete_retirada(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let service = RetiradaService::new(state.db);
    service.delete_retirada(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
