#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use catalog_api::features::auth::services::{
    AuthService, StaticCredentialVerifier, TokenService,
};
use catalog_api::features::categories::{routes as categories_routes, CategoryService};
use catalog_api::features::services::{routes as services_routes, ServiceCatalogService};

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TEST_EMAIL: &str = "admin@example.com";
pub const TEST_PASSWORD: &str = "Admin123!@#";

pub fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(TEST_SECRET, Duration::from_secs(3600)))
}

pub fn auth_service(tokens: Arc<TokenService>) -> Arc<AuthService> {
    let admin = catalog_api::core::config::AdminConfig {
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
    };
    Arc::new(AuthService::new(
        Arc::new(StaticCredentialVerifier::new(admin)),
        tokens,
    ))
}

/// Catalog routers without the access gate; the gate has its own tests.
pub fn catalog_app(pool: PgPool) -> TestServer {
    let app = Router::new()
        .merge(categories_routes::routes(Arc::new(CategoryService::new(
            pool.clone(),
        ))))
        .merge(services_routes::routes(Arc::new(
            ServiceCatalogService::new(pool),
        )));
    TestServer::new(app).unwrap()
}

pub async fn create_test_category(pool: &PgPool, name: &str) -> i32 {
    sqlx::query_scalar::<_, i32>("INSERT INTO categories (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_service(pool: &PgPool, category_id: i32, name: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO services (name, type, category_id) VALUES ($1, 'Normal', $2) RETURNING id",
    )
    .bind(name)
    .bind(category_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_option(pool: &PgPool, service_id: i32) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO service_price_options (service_id, duration, price, type) \
         VALUES ($1, 1, 10.00, 'Hourly') RETURNING id",
    )
    .bind(service_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_categories(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_services(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM services")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_options(pool: &PgPool, service_id: i32) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM service_price_options WHERE service_id = $1",
    )
    .bind(service_id)
    .fetch_one(pool)
    .await
    .unwrap()
}
