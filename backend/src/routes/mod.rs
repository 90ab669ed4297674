//! Route definitions for the inventory backend

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Suppliers
        .nest("/fornecedores", fornecedor_routes())
        // Products
        .nest("/produtos", produto_routes())
        // Inbound movements
        .nest("/entradas", entrada_routes())
        // Outbound movements
        .nest("/retiradas", retirada_routes())
        // Stock movement report (read-only)
        .route("/movimentacoes", get(handlers::list_movimentacoes))
}

/// Supplier routes
fn fornecedor_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_fornecedores).post(handlers::create_fornecedor),
        )
        .route(
            "/:id",
            get(handlers::get_fornecedor)
                .put(handlers::update_fornecedor)
                .delete(handlers::delete_fornecedor),
        )
}

/// Product routes
fn produto_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_produtos).post(handlers::create_produto),
        )
        .route(
            "/:id",
            get(handlers::get_produto)
                .put(handlers::update_produto)
                .delete(handlers::delete_produto),
        )
        .route("/:id/estoque", get(handlers::get_produto_saldo))
}

/// Inbound movement routes
fn entrada_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_entradas).post(handlers::create_entrada),
        )
        .route(
            "/:id",
            get(handlers::get_entrada)
                .put(handlers::update_entrada)
                .delete(handlers::delete_entrada),
        )
}

/// Outbound movement routes
fn retirada_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_retiradas).post(handlers::create_retirada),
        )
        .route(
            "/:id",
            get(handlers::get_retirada)
                .put(handlers::update_retirada)
                .delete(handlers::delete_retirada),
        )
}
