//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::PageFetcher;
use crate::server::routes::{
    delete_product_handler, get_product_handler, health_handler, list_products_handler,
    price_history_handler, root_handler, track_product_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub fetcher: Arc<dyn PageFetcher>,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, fetcher: Arc<dyn PageFetcher>) -> Router {
    let state = AppState {
        db_pool: pool,
        fetcher,
    };

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/track", post(track_product_handler))
        .route("/api/products", get(list_products_handler))
        .route(
            "/api/products/:id",
            get(get_product_handler).delete(delete_product_handler),
        )
        .route("/api/products/:id/history", get(price_history_handler))
        .layer(Extension(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
