//! HTTP handlers for the stock movement report

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::movimentacao::{Movimentacao, MovimentacaoService};
use crate::AppState;

/// List all stock movements grouped by product and movement dates
pub async fn list_movimentacoes(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Movimentacao>>> {
    let service = MovimentacaoService::new(state.db);
    let movimentacoes = service.get_movimentacoes().await?;
    Ok(Json(movimentacoes))
}
