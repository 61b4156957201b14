//! Database-backed tests for the service endpoints, with particular attention
//! to the all-or-nothing semantics of multi-row writes.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use sqlx::PgPool;

#[sqlx::test]
async fn create_service_with_options_round_trips(pool: PgPool) {
    let server = common::catalog_app(pool.clone());
    let category_id = common::create_test_category(&pool, "Cleaning").await;

    let response = server
        .post(&format!("/api/category/{category_id}/service"))
        .json(&json!({
            "name": "Window washing",
            "type": "Normal",
            "priceOptions": [
                { "duration": 1, "price": 10.00, "type": "Hourly" },
                { "duration": 2, "price": 25.50, "type": "Weekly" }
            ]
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Service created successfully"));
    assert_eq!(body["data"]["name"], json!("Window washing"));
    assert_eq!(body["data"]["type"], json!("Normal"));
    assert_eq!(body["data"]["categoryId"], json!(category_id));

    let options = body["data"]["priceOptions"].as_array().unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0]["duration"], json!(1));
    assert_eq!(options[0]["price"], json!("10.00"));
    assert_eq!(options[0]["type"], json!("Hourly"));
    assert_eq!(options[1]["price"], json!("25.50"));

    let list = server
        .get(&format!("/api/category/{category_id}/services"))
        .await;
    list.assert_status(StatusCode::OK);
    let list_body: Value = list.json();
    assert_eq!(list_body["message"], json!("Services retrieved successfully"));
    assert_eq!(list_body["count"], json!(1));
    assert_eq!(
        list_body["data"][0]["priceOptions"].as_array().unwrap().len(),
        2
    );
}

#[sqlx::test]
async fn create_without_options_is_rejected(pool: PgPool) {
    let server = common::catalog_app(pool.clone());
    let category_id = common::create_test_category(&pool, "Cleaning").await;

    let response = server
        .post(&format!("/api/category/{category_id}/service"))
        .json(&json!({
            "name": "Window washing",
            "type": "Normal",
            "priceOptions": []
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["message"],
        json!("Name, type and at least one price option are required")
    );
    assert_eq!(common::count_services(&pool).await, 0);
}

#[sqlx::test]
async fn one_invalid_option_rolls_back_the_whole_create(pool: PgPool) {
    let server = common::catalog_app(pool.clone());
    let category_id = common::create_test_category(&pool, "Cleaning").await;

    let response = server
        .post(&format!("/api/category/{category_id}/service"))
        .json(&json!({
            "name": "Window washing",
            "type": "Normal",
            "priceOptions": [
                { "duration": 1, "price": 10.00, "type": "Hourly" },
                { "duration": 2, "type": "Weekly" }
            ]
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["message"],
        json!("Duration, price and type are required for each price option")
    );
    assert_eq!(common::count_services(&pool).await, 0);
}

#[sqlx::test]
async fn create_under_unknown_category_is_not_found(pool: PgPool) {
    let server = common::catalog_app(pool);

    let response = server
        .post("/api/category/9999/service")
        .json(&json!({
            "name": "Window washing",
            "type": "Normal",
            "priceOptions": [{ "duration": 1, "price": 10.00, "type": "Hourly" }]
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Category not found"));
}

#[sqlx::test]
async fn create_with_unknown_service_type_is_rejected(pool: PgPool) {
    let server = common::catalog_app(pool.clone());
    let category_id = common::create_test_category(&pool, "Cleaning").await;

    let response = server
        .post(&format!("/api/category/{category_id}/service"))
        .json(&json!({
            "name": "Window washing",
            "type": "Premium",
            "priceOptions": [{ "duration": 1, "price": 10.00, "type": "Hourly" }]
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Service type must be either Normal or VIP"));
}

#[sqlx::test]
async fn list_unknown_category_is_not_found(pool: PgPool) {
    let server = common::catalog_app(pool);

    let response = server.get("/api/category/9999/services").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Category not found"));
}

#[sqlx::test]
async fn update_replaces_the_whole_option_set(pool: PgPool) {
    let server = common::catalog_app(pool.clone());
    let category_id = common::create_test_category(&pool, "Cleaning").await;
    let service_id = common::create_test_service(&pool, category_id, "Window washing").await;
    let old_option_id = common::create_test_option(&pool, service_id).await;

    let response = server
        .put(&format!("/api/category/{category_id}/service/{service_id}"))
        .json(&json!({
            "name": "Deep window washing",
            "type": "VIP",
            "priceOptions": [
                { "duration": 1, "price": 50.00, "type": "Weekly" },
                { "duration": 3, "price": 120.00, "type": "Monthly" }
            ]
        }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Service updated successfully"));
    assert_eq!(body["data"]["name"], json!("Deep window washing"));
    assert_eq!(body["data"]["type"], json!("VIP"));

    let options = body["data"]["priceOptions"].as_array().unwrap();
    assert_eq!(options.len(), 2);
    assert!(options
        .iter()
        .all(|o| o["id"].as_i64() != Some(old_option_id as i64)));
    assert_eq!(common::count_options(&pool, service_id).await, 2);
}

#[sqlx::test]
async fn update_without_options_field_keeps_existing_options(pool: PgPool) {
    let server = common::catalog_app(pool.clone());
    let category_id = common::create_test_category(&pool, "Cleaning").await;
    let service_id = common::create_test_service(&pool, category_id, "Window washing").await;
    let option_id = common::create_test_option(&pool, service_id).await;

    let response = server
        .put(&format!("/api/category/{category_id}/service/{service_id}"))
        .json(&json!({ "name": "Renamed", "type": "Normal" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["name"], json!("Renamed"));

    let options = body["data"]["priceOptions"].as_array().unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0]["id"], json!(option_id));
}

#[sqlx::test]
async fn update_with_empty_options_array_is_rejected(pool: PgPool) {
    let server = common::catalog_app(pool.clone());
    let category_id = common::create_test_category(&pool, "Cleaning").await;
    let service_id = common::create_test_service(&pool, category_id, "Window washing").await;
    common::create_test_option(&pool, service_id).await;

    let response = server
        .put(&format!("/api/category/{category_id}/service/{service_id}"))
        .json(&json!({ "name": "Renamed", "type": "Normal", "priceOptions": [] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], json!("At least one price option is required"));
    assert_eq!(common::count_options(&pool, service_id).await, 1);
}

#[sqlx::test]
async fn invalid_replacement_option_rolls_back_name_change(pool: PgPool) {
    let server = common::catalog_app(pool.clone());
    let category_id = common::create_test_category(&pool, "Cleaning").await;
    let service_id = common::create_test_service(&pool, category_id, "Window washing").await;
    common::create_test_option(&pool, service_id).await;

    let response = server
        .put(&format!("/api/category/{category_id}/service/{service_id}"))
        .json(&json!({
            "name": "Renamed",
            "type": "Normal",
            "priceOptions": [{ "duration": 1, "price": 10.00, "type": "Yearly" }]
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let name = sqlx::query_scalar::<_, String>("SELECT name FROM services WHERE id = $1")
        .bind(service_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(name, "Window washing");
    assert_eq!(common::count_options(&pool, service_id).await, 1);
}

#[sqlx::test]
async fn update_service_outside_category_is_not_found(pool: PgPool) {
    let server = common::catalog_app(pool.clone());
    let category_id = common::create_test_category(&pool, "Cleaning").await;
    let other_id = common::create_test_category(&pool, "Plumbing").await;
    let service_id = common::create_test_service(&pool, category_id, "Window washing").await;

    let response = server
        .put(&format!("/api/category/{other_id}/service/{service_id}"))
        .json(&json!({ "name": "Renamed", "type": "Normal" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(
        body["message"],
        json!("Service not found in the specified category")
    );
}

#[sqlx::test]
async fn delete_service_cascades_its_options(pool: PgPool) {
    let server = common::catalog_app(pool.clone());
    let category_id = common::create_test_category(&pool, "Cleaning").await;
    let service_id = common::create_test_service(&pool, category_id, "Window washing").await;
    common::create_test_option(&pool, service_id).await;

    let response = server
        .delete(&format!("/api/category/{category_id}/service/{service_id}"))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], json!("Service deleted successfully"));
    assert_eq!(common::count_services(&pool).await, 0);
    assert_eq!(common::count_options(&pool, service_id).await, 0);
}

#[sqlx::test]
async fn delete_unknown_service_is_not_found(pool: PgPool) {
    let server = common::catalog_app(pool.clone());
    let category_id = common::create_test_category(&pool, "Cleaning").await;

    let response = server
        .delete(&format!("/api/category/{category_id}/service/9999"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(
        body["message"],
        json!("Service not found in the specified category")
    );
}
