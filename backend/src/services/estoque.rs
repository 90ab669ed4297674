//! Stock ledger for deriving per-product on-hand quantity
//!
//! Stock is never stored on the product row. The on-hand quantity is always
//! recomputed from the movement ledger as SUM(entradas) - SUM(retiradas),
//! which keeps the balance consistent with the movements under concurrent
//! mutation at the cost of an aggregation per read.

use serde::Serialize;
use sqlx::{FromRow, PgPool, Postgres, Transaction};

use crate::error::{AppError, AppResult};

/// Derived balance of entradas minus retiradas for one product.
const SALDO_SQL: &str = r#"
    SELECT COALESCE((SELECT SUM(e.quantidade) FROM entradas e WHERE e.produto_id = $1), 0)
         - COALESCE((SELECT SUM(r.quantidade) FROM retiradas r WHERE r.produto_id = $1), 0)
"#;

/// Stock ledger service
#[derive(Clone)]
pub struct EstoqueService {
    db: PgPool,
}

/// Derived stock balance for a product
#[derive(Debug, Clone, Serialize)]
pub struct SaldoProduto {
    pub produto_id: i32,
    pub nome: String,
    pub quantidade_total_entrada: i64,
    pub quantidade_total_saida: i64,
    pub quantidade_em_estoque: i64,
}

/// Row for balance query
#[derive(Debug, FromRow)]
struct SaldoRow {
    id: i32,
    nome: String,
    total_entrada: i64,
    total_saida: i64,
}

impl EstoqueService {
    /// Create a new EstoqueService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Current on-hand quantity for a product; 0 when it has no movements
    pub async fn saldo_atual(&self, produto_id: i32) -> AppResult<i64> {
        let saldo = sqlx::query_scalar::<_, i64>(SALDO_SQL)
            .bind(produto_id)
            .fetch_one(&self.db)
            .await?;

        Ok(saldo)
    }

    /// On-hand quantity read inside an open transaction
    ///
    /// Used by the outbound guard so the ledger is read under the product
    /// row lock taken by the same transaction.
    pub async fn saldo_em(
        tx: &mut Transaction<'_, Postgres>,
        produto_id: i32,
    ) -> AppResult<i64> {
        let saldo = sqlx::query_scalar::<_, i64>(SALDO_SQL)
            .bind(produto_id)
            .fetch_one(&mut **tx)
            .await?;

        Ok(saldo)
    }

    /// Derived balance with totals for a product
    pub async fn saldo_produto(&self, produto_id: i32) -> AppResult<SaldoProduto> {
        let row = sqlx::query_as::<_, SaldoRow>(
            r#"
            SELECT p.id, p.nome,
                   COALESCE((SELECT SUM(e.quantidade) FROM entradas e WHERE e.produto_id = p.id), 0) AS total_entrada,
                   COALESCE((SELECT SUM(r.quantidade) FROM retiradas r WHERE r.produto_id = p.id), 0) AS total_saida
            FROM produtos p
            WHERE p.id = $1
            "#,
        )
        .bind(produto_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Produto".to_string()))?;

        Ok(SaldoProduto {
            produto_id: row.id,
            nome: row.nome,
            quantidade_total_entrada: row.total_entrada,
            quantidade_total_saida: row.total_saida,
            quantidade_em_estoque: row.total_entrada - row.total_saida,
        })
    }
}
