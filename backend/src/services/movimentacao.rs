//! Stock movement report service
//!
//! Read-only aggregation joining products against both movement tables.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::PgPool;

use crate::error::AppResult;

/// Movimentacao service for the stock movement report
#[derive(Clone)]
pub struct MovimentacaoService {
    db: PgPool,
}

/// One report row per (product name, inbound date, outbound date)
///
/// The per-date grouping is intentional and can fragment one product's
/// totals across several rows when its movements span multiple dates.
/// Products with no movements appear with null dates and zeroed totals.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Movimentacao {
    pub nome: String,
    pub data_entrada: Option<NaiveDate>,
    pub data_retirada: Option<NaiveDate>,
    pub quantidade_total_entrada: i64,
    pub quantidade_total_saida: i64,
    pub quantidade_em_estoque: i64,
}

impl MovimentacaoService {
    /// Create a new MovimentacaoService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all stock movements grouped by product and movement dates
    pub async fn get_movimentacoes(&self) -> AppResult<Vec<Movimentacao>> {
        let movimentacoes = sqlx::query_as::<_, Movimentacao>(
            r#"
            SELECT p.nome,
                   e.data_entrada,
                   r.data_retirada,
                   COALESCE(SUM(e.quantidade), 0) AS quantidade_total_entrada,
                   COALESCE(SUM(r.quantidade), 0) AS quantidade_total_saida,
                   COALESCE(SUM(e.quantidade), 0) - COALESCE(SUM(r.quantidade), 0)
                       AS quantidade_em_estoque
            FROM produtos p
            LEFT JOIN entradas e ON p.id = e.produto_id
            LEFT JOIN retiradas r ON p.id = r.produto_id
            GROUP BY p.nome, e.data_entrada, r.data_retirada
            ORDER BY p.nome
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(movimentacoes)
    }
}
