//! Supplier (fornecedor) management service

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Fornecedor service for supplier CRUD
#[derive(Clone)]
pub struct FornecedorService {
    db: PgPool,
}

/// Supplier record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Fornecedor {
    pub id: i32,
    pub nome: String,
    pub cnpj: Option<String>,
    pub telefone: Option<String>,
    pub celular: Option<String>,
    pub email: Option<String>,
    pub site: Option<String>,
    pub cep: Option<String>,
    pub endereco: Option<String>,
    pub numero_endereco: Option<String>,
    pub cidade: Option<String>,
    pub bairro: Option<String>,
    pub estado: Option<String>,
    pub banco: Option<String>,
    pub tipo_conta: Option<String>,
    pub conta: Option<String>,
    pub agencia_bancaria: Option<String>,
}

/// Input for creating or replacing a supplier
#[derive(Debug, Deserialize)]
pub struct FornecedorInput {
    pub nome: String,
    pub cnpj: Option<String>,
    pub telefone: Option<String>,
    pub celular: Option<String>,
    pub email: Option<String>,
    pub site: Option<String>,
    pub cep: Option<String>,
    pub endereco: Option<String>,
    pub numero_endereco: Option<String>,
    pub cidade: Option<String>,
    pub bairro: Option<String>,
    pub estado: Option<String>,
    pub banco: Option<String>,
    pub tipo_conta: Option<String>,
    pub conta: Option<String>,
    pub agencia_bancaria: Option<String>,
}

const FORNECEDOR_COLUMNS: &str = "id, nome, cnpj, telefone, celular, email, site, cep, endereco, \
     numero_endereco, cidade, bairro, estado, banco, tipo_conta, conta, agencia_bancaria";

impl FornecedorService {
    /// Create a new FornecedorService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    fn validate(input: &FornecedorInput) -> AppResult<()> {
        if input.nome.trim().is_empty() {
            return Err(AppError::Validation {
                field: "nome".to_string(),
                message: "Supplier name cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Get all suppliers, ordered by id
    pub async fn get_fornecedores(&self) -> AppResult<Vec<Fornecedor>> {
        let fornecedores = sqlx::query_as::<_, Fornecedor>(&format!(
            "SELECT {} FROM fornecedores ORDER BY id",
            FORNECEDOR_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(fornecedores)
    }

    /// Get a supplier by id
    pub async fn get_fornecedor(&self, id: i32) -> AppResult<Fornecedor> {
        let fornecedor = sqlx::query_as::<_, Fornecedor>(&format!(
            "SELECT {} FROM fornecedores WHERE id = $1",
            FORNECEDOR_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Fornecedor".to_string()))?;

        Ok(fornecedor)
    }

    /// Create a new supplier
    pub async fn create_fornecedor(&self, input: FornecedorInput) -> AppResult<Fornecedor> {
        Self::validate(&input)?;

        let fornecedor = sqlx::query_as::<_, Fornecedor>(&format!(
            r#"
            INSERT INTO fornecedores (nome, cnpj, telefone, celular, email, site, cep, endereco,
                                      numero_endereco, cidade, bairro, estado, banco, tipo_conta,
                                      conta, agencia_bancaria)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING {}
            "#,
            FORNECEDOR_COLUMNS
        ))
        .bind(&input.nome)
        .bind(&input.cnpj)
        .bind(&input.telefone)
        .bind(&input.celular)
        .bind(&input.email)
        .bind(&input.site)
        .bind(&input.cep)
        .bind(&input.endereco)
        .bind(&input.numero_endereco)
        .bind(&input.cidade)
        .bind(&input.bairro)
        .bind(&input.estado)
        .bind(&input.banco)
        .bind(&input.tipo_conta)
        .bind(&input.conta)
        .bind(&input.agencia_bancaria)
        .fetch_one(&self.db)
        .await?;

        Ok(fornecedor)
    }

    /// Replace an existing supplier
    pub async fn update_fornecedor(
        &self,
        id: i32,
        input: FornecedorInput,
    ) -> AppResult<Fornecedor> {
        Self::validate(&input)?;

        let fornecedor = sqlx::query_as::<_, Fornecedor>(&format!(
            r#"
            UPDATE fornecedores
            SET nome = $1, cnpj = $2, telefone = $3, celular = $4, email = $5, site = $6,
                cep = $7, endereco = $8, numero_endereco = $9, cidade = $10, bairro = $11,
                estado = $12, banco = $13, tipo_conta = $14, conta = $15, agencia_bancaria = $16
            WHERE id = $17
            RETURNING {}
            "#,
            FORNECEDOR_COLUMNS
        ))
        .bind(&input.nome)
        .bind(&input.cnpj)
        .bind(&input.telefone)
        .bind(&input.celular)
        .bind(&input.email)
        .bind(&input.site)
        .bind(&input.cep)
        .bind(&input.endereco)
        .bind(&input.numero_endereco)
        .bind(&input.cidade)
        .bind(&input.bairro)
        .bind(&input.estado)
        .bind(&input.banco)
        .bind(&input.tipo_conta)
        .bind(&input.conta)
        .bind(&input.agencia_bancaria)
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Fornecedor".to_string()))?;

        Ok(fornecedor)
    }

    /// Delete a supplier
    pub async fn delete_fornecedor(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM fornecedores WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Fornecedor".to_string()));
        }

        Ok(())
    }
}
