//! Outbound movement (retirada) service
//!
//! A retirada decreases the derived stock of its product by `quantidade`.
//! Creation must not withdraw more than the current on-hand quantity, so
//! the check and the insert run in one transaction holding a lock on the
//! product row. Concurrent withdrawals for the same product serialize on
//! that lock instead of racing between the balance read and the insert.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::services::estoque::EstoqueService;

/// Retirada service for outbound movement CRUD
#[derive(Clone)]
pub struct RetiradaService {
    db: PgPool,
}

/// Outbound movement with the product name joined in
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Retirada {
    pub id: i32,
    pub produto_id: i32,
    pub produto_nome: String,
    pub quantidade: i32,
    pub tipo_retirada: String,
    pub data_retirada: NaiveDate,
    pub numero_lote: Option<String>,
}

/// Input for creating or replacing an outbound movement
#[derive(Debug, Deserialize)]
pub struct RetiradaInput {
    pub produto_id: i32,
    pub quantidade: i32,
    pub tipo_retirada: String,
    pub data_retirada: NaiveDate,
    pub numero_lote: Option<String>,
}

const RETIRADA_SELECT: &str = r#"
    SELECT r.id, r.produto_id, p.nome AS produto_nome, r.quantidade,
           r.tipo_retirada, r.data_retirada, r.numero_lote
    FROM retiradas r
    JOIN produtos p ON r.produto_id = p.id
"#;

impl RetiradaService {
    /// Create a new RetiradaService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    fn validate(input: &RetiradaInput) -> AppResult<()> {
        if input.quantidade <= 0 {
            return Err(AppError::Validation {
                field: "quantidade".to_string(),
                message: "Quantity must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Get all outbound movements, ordered by id
    pub async fn get_retiradas(&self) -> AppResult<Vec<Retirada>> {
        let retiradas =
            sqlx::query_as::<_, Retirada>(&format!("{} ORDER BY r.id", RETIRADA_SELECT))
                .fetch_all(&self.db)
                .await?;

        Ok(retiradas)
    }

    /// Get an outbound movement by id
    pub async fn get_retirada(&self, id: i32) -> AppResult<Retirada> {
        let retirada =
            sqlx::query_as::<_, Retirada>(&format!("{} WHERE r.id = $1", RETIRADA_SELECT))
                .bind(id)
                .fetch_optional(&self.db)
                .await?
                .ok_or_else(|| AppError::NotFound("Retirada".to_string()))?;

        Ok(retirada)
    }

    /// Record a new outbound movement, guarded by the stock check
    ///
    /// Fails with EstoqueInsuficiente when `quantidade` exceeds the current
    /// on-hand quantity; the row is not persisted in that case.
    pub async fn create_retirada(&self, input: RetiradaInput) -> AppResult<Retirada> {
        Self::validate(&input)?;

        let mut tx = self.db.begin().await?;

        // Lock the product row so concurrent withdrawals for the same
        // product cannot both pass the balance check.
        sqlx::query_scalar::<_, i32>("SELECT id FROM produtos WHERE id = $1 FOR UPDATE")
            .bind(input.produto_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Produto".to_string()))?;

        let disponivel = EstoqueService::saldo_em(&mut tx, input.produto_id).await?;
        let solicitado = i64::from(input.quantidade);

        if solicitado > disponivel {
            return Err(AppError::EstoqueInsuficiente {
                solicitado,
                disponivel,
            });
        }

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO retiradas (produto_id, quantidade, tipo_retirada, data_retirada,
                                   numero_lote)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(input.produto_id)
        .bind(input.quantidade)
        .bind(&input.tipo_retirada)
        .bind(input.data_retirada)
        .bind(&input.numero_lote)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        self.get_retirada(id).await
    }

    /// Replace an existing outbound movement
    ///
    /// Accepted policy gap: the new quantity is not re-checked against the
    /// stock balance, so an update can leave cumulative withdrawals above
    /// cumulative deposits. The sufficiency check only runs at insert time.
    pub async fn update_retirada(&self, id: i32, input: RetiradaInput) -> AppResult<Retirada> {
        Self::validate(&input)?;

        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM produtos WHERE id = $1)")
                .bind(input.produto_id)
                .fetch_one(&self.db)
                .await?;

        if !exists {
            return Err(AppError::NotFound("Produto".to_string()));
        }

        sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE retiradas
            SET produto_id = $1, quantidade = $2, tipo_retirada = $3, data_retirada = $4,
                numero_lote = $5
            WHERE id = $6
            RETURNING id
            "#,
        )
        .bind(input.produto_id)
        .bind(input.quantidade)
        .bind(&input.tipo_retirada)
        .bind(input.data_retirada)
        .bind(&input.numero_lote)
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Retirada".to_string()))?;

        self.get_retirada(id).await
    }

    /// Delete an outbound movement
    ///
    /// Deletes directly; the derived stock reflects the removal on the
    /// next read.
    pub async fn delete_retirada(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM retiradas WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Retirada".to_string()));
        }

        Ok(())
    }
}
