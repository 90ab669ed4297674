//! HTTP handlers for inbound movement endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::services::entrada::{Entrada, EntradaInput, EntradaService};
use crate::AppState;

/// List all inbound movements
pub async fn list_entradas(State(state): State<AppState>) -> AppResult<Json<Vec<Entrada>>> {
    let service = EntradaService::new(state.db);
    let entradas = service.get_entradas().await?;
    Ok(Json(entradas))
}

/// Get an inbound movement by id
pub async fn get_entrada(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Entrada>> {
    let service = EntradaService::new(state.db);
    let entrada = service.get_entrada(id).await?;
    Ok(Json(entrada))
}

/// Record a new inbound movement
pub async fn create_entrada(
    State(state): State<AppState>,
    Json(input): Json<EntradaInput>,
) -> AppResult<(StatusCode, Json<Entrada>)> {
    let service = EntradaService::new(state.db);
    let entrada = service.create_entrada(input).await?;
    Ok((StatusCode::CREATED, Json(entrada)))
}

/// Replace an existing inbound movement
pub async fn update_entrada(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<EntradaInput>,
) -> AppResult<Json<Entrada>> {
    let service = EntradaService::new(state.db);
    let entrada = service.update_entrada(id, input).await?;
    Ok(Json(entrada))
}

/// Delete an inbound movement
pub async fn delete_entrada(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let service = EntradaService::new(state.db);
    service.delete_entrada(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
