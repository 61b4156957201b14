use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::services::handlers;
use crate::features::services::services::ServiceCatalogService;

/// Create routes for the services feature
///
/// Note: All routes sit behind the bearer-token middleware applied in `main`.
pub fn routes(service: Arc<ServiceCatalogService>) -> Router {
    Router::new()
        .route(
            "/api/category/{category_id}/service",
            post(handlers::create_service),
        )
        .route(
            "/api/category/{category_id}/services",
            get(handlers::list_services),
        )
        .route(
            "/api/category/{category_id}/service/{service_id}",
            put(handlers::update_service).delete(handlers::delete_service),
        )
        .with_state(service)
}
