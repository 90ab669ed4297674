//! Error handling for the inventory backend
//!
//! Maps error kinds to HTTP status codes at the boundary: missing
//! identities are 404, validation and insufficient stock are 400,
//! store failures are 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Business logic errors
    #[error("Insufficient stock: requested {solicitado}, available {disponivel}")]
    EstoqueInsuficiente { solicitado: i64, disponivel: i64 },

    // Database errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Internal errors
    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solicitado: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disponivel: Option<i64>,
}

impl ErrorDetail {
    fn new(code: &str, message: String) -> Self {
        Self {
            code: code.to_string(),
            message,
            field: None,
            solicitado: None,
            disponivel: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    field: Some(field.clone()),
                    ..ErrorDetail::new("VALIDATION_ERROR", message.clone())
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail::new("NOT_FOUND", format!("{} not found", resource)),
            ),
            AppError::EstoqueInsuficiente {
                solicitado,
                disponivel,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    solicitado: Some(*solicitado),
                    disponivel: Some(*disponivel),
                    ..ErrorDetail::new(
                        "ESTOQUE_INSUFICIENTE",
                        format!(
                            "Estoque insuficiente para a retirada: solicitado {}, disponível {}",
                            solicitado, disponivel
                        ),
                    )
                },
            ),
            AppError::DatabaseError(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new("DATABASE_ERROR", e.to_string()),
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new(
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                ),
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn estoque_insuficiente_maps_to_400_with_quantities() {
        let err = AppError::EstoqueInsuficiente {
            solicitado: 1000,
            disponivel: 70,
        };
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "ESTOQUE_INSUFICIENTE");
        assert_eq!(json["error"]["solicitado"], 1000);
        assert_eq!(json["error"]["disponivel"], 70);
        // Unset detail fields stay out of the payload
        assert!(json["error"].get("field").is_none());
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let response = AppError::NotFound("Produto".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "Produto not found");
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_field() {
        let err = AppError::Validation {
            field: "quantidade".to_string(),
            message: "Quantity must be positive".to_string(),
        };
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["field"], "quantidade");
    }
}
