//! Product (produto) management service

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Produto service for product CRUD
#[derive(Clone)]
pub struct ProdutoService {
    db: PgPool,
}

/// Product record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Produto {
    pub id: i32,
    pub nome: String,
    pub marca: Option<String>,
    pub categoria: Option<String>,
    pub fornecedor_id: Option<i32>,
    pub picture: Option<String>,
}

/// Product listing row with the supplier name attached
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProdutoComFornecedor {
    pub id: i32,
    pub nome: String,
    pub marca: Option<String>,
    pub categoria: Option<String>,
    pub fornecedor_id: Option<i32>,
    pub picture: Option<String>,
    pub fornecedor_nome: Option<String>,
}

/// Input for creating or replacing a product
#[derive(Debug, Deserialize)]
pub struct ProdutoInput {
    pub nome: String,
    pub marca: Option<String>,
    pub categoria: Option<String>,
    pub fornecedor_id: Option<i32>,
    pub picture: Option<String>,
}

impl ProdutoService {
    /// Create a new ProdutoService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    fn validate(input: &ProdutoInput) -> AppResult<()> {
        if input.nome.trim().is_empty() {
            return Err(AppError::Validation {
                field: "nome".to_string(),
                message: "Product name cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Get all products with the supplier name joined in
    pub async fn get_produtos(&self) -> AppResult<Vec<ProdutoComFornecedor>> {
        let produtos = sqlx::query_as::<_, ProdutoComFornecedor>(
            r#"
            SELECT p.id, p.nome, p.marca, p.categoria, p.fornecedor_id, p.picture,
                   f.nome AS fornecedor_nome
            FROM produtos p
            LEFT JOIN fornecedores f ON p.fornecedor_id = f.id
            ORDER BY p.id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(produtos)
    }

    /// Get a product by id
    pub async fn get_produto(&self, id: i32) -> AppResult<Produto> {
        let produto = sqlx::query_as::<_, Produto>(
            "SELECT id, nome, marca, categoria, fornecedor_id, picture FROM produtos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Produto".to_string()))?;

        Ok(produto)
    }

    /// Create a new product
    pub async fn create_produto(&self, input: ProdutoInput) -> AppResult<Produto> {
        Self::validate(&input)?;

        let produto = sqlx::query_as::<_, Produto>(
            r#"
            INSERT INTO produtos (nome, marca, categoria, fornecedor_id, picture)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, nome, marca, categoria, fornecedor_id, picture
            "#,
        )
        .bind(&input.nome)
        .bind(&input.marca)
        .bind(&input.categoria)
        .bind(input.fornecedor_id)
        .bind(&input.picture)
        .fetch_one(&self.db)
        .await?;

        Ok(produto)
    }

    /// Replace an existing product
    pub async fn update_produto(&self, id: i32, input: ProdutoInput) -> AppResult<Produto> {
        Self::validate(&input)?;

        let produto = sqlx::query_as::<_, Produto>(
            r#"
            UPDATE produtos
            SET nome = $1, marca = $2, categoria = $3, fornecedor_id = $4, picture = $5
            WHERE id = $6
            RETURNING id, nome, marca, categoria, fornecedor_id, picture
            "#,
        )
        .bind(&input.nome)
        .bind(&input.marca)
        .bind(&input.categoria)
        .bind(input.fornecedor_id)
        .bind(&input.picture)
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Produto".to_string()))?;

        Ok(produto)
    }

    /// Delete a product
    pub async fn delete_produto(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM produtos WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Produto".to_string()));
        }

        Ok(())
    }
}
