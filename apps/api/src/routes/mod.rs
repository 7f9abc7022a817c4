pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::assistant::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/catalog", get(handlers::handle_catalog))
        .route("/api/v1/labels", get(handlers::handle_labels))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/cold-mail", post(handlers::handle_cold_mail))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
