use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;

/// Create routes for the auth feature
///
/// Note: Login is the only endpoint that does not sit behind the access gate.
pub fn routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/login", post(handlers::login))
        .with_state(service)
}
