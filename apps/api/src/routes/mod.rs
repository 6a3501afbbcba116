pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::document::handlers as document;
use crate::layout::handlers as layout;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Layout engine
        .route("/api/v1/layout/segment", post(layout::handle_segment))
        .route("/api/v1/layout/wrap", post(layout::handle_wrap))
        .route("/api/v1/layout/paginate", post(layout::handle_paginate))
        // Documents
        .route(
            "/api/v1/documents/:variant",
            get(document::handle_get_document),
        )
        .with_state(state)
}
