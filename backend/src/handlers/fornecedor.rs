//! HTTP handlers for supplier endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::services::fornecedor::{Fornecedor, FornecedorInput, FornecedorService};
use crate::AppState;

/// List all suppliers
pub async fn list_fornecedores(State(state): State<AppState>) -> AppResult<Json<Vec<Fornecedor>>> {
    let service = FornecedorService::new(state.db);
    let fornecedores = service.get_fornecedores().await?;
    Ok(Json(fornecedores))
}

/// Get a supplier by id
pub async fn get_fornecedor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Fornecedor>> {
    let service = FornecedorService::new(state.db);
    let fornecedor = service.get_fornecedor(id).await?;
    Ok(Json(fornecedor))
}

/// Create a new supplier
pub async fn create_fornecedor(
    State(state): State<AppState>,
    Json(input): Json<FornecedorInput>,
) -> AppResult<(StatusCode, Json<Fornecedor>)> {
    let service = FornecedorService::new(state.db);
    let fornecedor = service.create_fornecedor(input).await?;
    Ok((StatusCode::CREATED, Json(fornecedor)))
}

/// Replace an existing supplier
pub async fn update_fornecedor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<FornecedorInput>,
) -> AppResult<Json<Fornecedor>> {
    let service = FornecedorService::new(state.db);
    let fornecedor = service.update_fornecedor(id, input).await?;
    Ok(Json(fornecedor))
}

/// Delete a supplier
pub async fn delete_fornecedor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let service = FornecedorService::new(state.db);
    service.delete_fornecedor(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
