//! Inbound movement (entrada) service
//!
//! An entrada increases the derived stock of its product by `quantidade`.
//! Inserting one needs no balance check, inbound movements only grow the
//! ledger.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Entrada service for inbound movement CRUD
#[derive(Clone)]
pub struct EntradaService {
    db: PgPool,
}

/// Inbound movement with product and supplier names joined in
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Entrada {
    pub id: i32,
    pub produto_id: i32,
    pub produto_nome: String,
    pub quantidade: i32,
    pub fornecedor_id: Option<i32>,
    pub fornecedor_nome: Option<String>,
    pub data_entrada: NaiveDate,
    pub numero_lote: Option<String>,
    pub preco_compra: Option<Decimal>,
}

/// Input for creating or replacing an inbound movement
#[derive(Debug, Deserialize)]
pub struct EntradaInput {
    pub produto_id: i32,
    pub quantidade: i32,
    pub fornecedor_id: Option<i32>,
    pub data_entrada: NaiveDate,
    pub numero_lote: Option<String>,
    pub preco_compra: Option<Decimal>,
}

const ENTRADA_SELECT: &str = r#"
    SELECT e.id, e.produto_id, p.nome AS produto_nome, e.quantidade,
           e.fornecedor_id, f.nome AS fornecedor_nome,
           e.data_entrada, e.numero_lote, e.preco_compra
    FROM entradas e
    JOIN produtos p ON e.produto_id = p.id
    LEFT JOIN fornecedores f ON e.fornecedor_id = f.id
"#;

impl EntradaService {
    /// Create a new EntradaService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    fn validate(input: &EntradaInput) -> AppResult<()> {
        if input.quantidade <= 0 {
            return Err(AppError::Validation {
                field: "quantidade".to_string(),
                message: "Quantity must be positive".to_string(),
            });
        }
        Ok(())
    }

    async fn produto_exists(&self, produto_id: i32) -> AppResult<()> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM produtos WHERE id = $1)")
                .bind(produto_id)
                .fetch_one(&self.db)
                .await?;

        if !exists {
            return Err(AppError::NotFound("Produto".to_string()));
        }

        Ok(())
    }

    /// Get all inbound movements, ordered by id
    pub async fn get_entradas(&self) -> AppResult<Vec<Entrada>> {
        let entradas =
            sqlx::query_as::<_, Entrada>(&format!("{} ORDER BY e.id", ENTRADA_SELECT))
                .fetch_all(&self.db)
                .await?;

        Ok(entradas)
    }

    /// Get an inbound movement by id
    pub async fn get_entrada(&self, id: i32) -> AppResult<Entrada> {
        let entrada =
            sqlx::query_as::<_, Entrada>(&format!("{} WHERE e.id = $1", ENTRADA_SELECT))
                .bind(id)
                .fetch_optional(&self.db)
                .await?
                .ok_or_else(|| AppError::NotFound("Entrada".to_string()))?;

        Ok(entrada)
    }

    /// Record a new inbound movement
    pub async fn create_entrada(&self, input: EntradaInput) -> AppResult<Entrada> {
        Self::validate(&input)?;
        self.produto_exists(input.produto_id).await?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO entradas (produto_id, quantidade, fornecedor_id, data_entrada,
                                  numero_lote, preco_compra)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(input.produto_id)
        .bind(input.quantidade)
        .bind(input.fornecedor_id)
        .bind(input.data_entrada)
        .bind(&input.numero_lote)
        .bind(input.preco_compra)
        .fetch_one(&self.db)
        .await?;

        self.get_entrada(id).await
    }

    /// Replace an existing inbound movement
    ///
    /// No stock re-validation happens here: under the derived model the
    /// balance is recomputed from the ledger on the next read, and the
    /// sufficiency check runs only at withdrawal-insert time.
    pub async fn update_entrada(&self, id: i32, input: EntradaInput) -> AppResult<Entrada> {
        Self::validate(&input)?;
        self.produto_exists(input.produto_id).await?;

        sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE entradas
            SET produto_id = $1, quantidade = $2, fornecedor_id = $3, data_entrada = $4,
                numero_lote = $5, preco_compra = $6
            WHERE id = $7
            RETURNING id
            "#,
        )
        .bind(input.produto_id)
        .bind(input.quantidade)
        .bind(input.fornecedor_id)
        .bind(input.data_entrada)
        .bind(&input.numero_lote)
        .bind(input.preco_compra)
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Entrada".to_string()))?;

        self.get_entrada(id).await
    }

    /// Delete an inbound movement
    ///
    /// Deletes directly; the derived stock reflects the removal on the
    /// next read.
    pub async fn delete_entrada(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM entradas WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Entrada".to_string()));
        }

        Ok(())
    }
}
