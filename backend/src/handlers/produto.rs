//! HTTP handlers for product endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::services::estoque::{EstoqueService, SaldoProduto};
use crate::services::produto::{Produto, ProdutoComFornecedor, ProdutoInput, ProdutoService};
use crate::AppState;

/// List all products with supplier names
pub async fn list_produtos(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProdutoComFornecedor>>> {
    let service = ProdutoService::new(state.db);
    let produtos = service.get_produtos().await?;
    Ok(Json(produtos))
}

/// Get a product by id
pub async fn get_produto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Produto>> {
    let service = ProdutoService::new(state.db);
    let produto = service.get_produto(id).await?;
    Ok(Json(produto))
}

/// Get the derived stock balance for a product
pub async fn get_produto_saldo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<SaldoProduto>> {
    let service = EstoqueService::new(state.db);
    let saldo = service.saldo_produto(id).await?;
    Ok(Json(saldo))
}

/// Create a new product
pub async fn create_produto(
    State(state): State<AppState>,
    Json(input): Json<ProdutoInput>,
) -> AppResult<(StatusCode, Json<Produto>)> {
    let service = ProdutoService::new(state.db);
    let produto = service.create_produto(input).await?;
    Ok((StatusCode::CREATED, Json(produto)))
}

/// Replace an existing product
pub async fn update_produto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<ProdutoInput>,
) -> AppResult<Json<Produto>> {
    let service = ProdutoService::new(state.db);
    let produto = service.update_produto(id, input).await?;
    Ok(Json(produto))
}

/// Delete a product
pub async fn delete_produto(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let service = ProdutoService::new(state.db);
    service.delete_produto(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
