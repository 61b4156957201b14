use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
///
/// Note: All routes sit behind the bearer-token middleware applied in `main`.
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/api/category", post(handlers::create_category))
        .route("/api/categories", get(handlers::list_categories))
        .route(
            "/api/category/{category_id}",
            put(handlers::update_category).delete(handlers::delete_category),
        )
        .with_state(service)
}
