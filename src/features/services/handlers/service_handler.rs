use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::services::dtos::{CreateServiceDto, ServiceResponseDto, UpdateServiceDto};
use crate::features::services::services::ServiceCatalogService;
use crate::shared::types::ApiResponse;

/// Create a service with its price options, all-or-nothing
#[utoipa::path(
    post,
    path = "/api/category/{category_id}/service",
    params(("category_id" = i32, Path, description = "Owning category id")),
    request_body = CreateServiceDto,
    responses(
        (status = 201, description = "Service created successfully", body = ApiResponse<ServiceResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    ),
    tag = "services",
    security(("bearer_auth" = []))
)]
pub async fn create_service(
    State(service): State<Arc<ServiceCatalogService>>,
    Path(category_id): Path<i32>,
    AppJson(dto): AppJson<CreateServiceDto>,
) -> Result<(StatusCode, Json<ApiResponse<ServiceResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = service.create(category_id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(created),
            Some("Service created successfully".to_string()),
            None,
        )),
    ))
}

/// List services of a category with nested price options, newest first
#[utoipa::path(
    get,
    path = "/api/category/{category_id}/services",
    params(("category_id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "List of services", body = ApiResponse<Vec<ServiceResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    ),
    tag = "services",
    security(("bearer_auth" = []))
)]
pub async fn list_services(
    State(service): State<Arc<ServiceCatalogService>>,
    Path(category_id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<ServiceResponseDto>>>> {
    let services = service.list(category_id).await?;
    let count = services.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(services),
        Some("Services retrieved successfully".to_string()),
        Some(count),
    )))
}

/// Update a service; a supplied priceOptions array replaces the whole set
#[utoipa::path(
    put,
    path = "/api/category/{category_id}/service/{service_id}",
    params(
        ("category_id" = i32, Path, description = "Category id"),
        ("service_id" = i32, Path, description = "Service id")
    ),
    request_body = UpdateServiceDto,
    responses(
        (status = 200, description = "Service updated successfully", body = ApiResponse<ServiceResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category or service not found")
    ),
    tag = "services",
    security(("bearer_auth" = []))
)]
pub async fn update_service(
    State(service): State<Arc<ServiceCatalogService>>,
    Path((category_id, service_id)): Path<(i32, i32)>,
    AppJson(dto): AppJson<UpdateServiceDto>,
) -> Result<Json<ApiResponse<ServiceResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(category_id, service_id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(updated),
        Some("Service updated successfully".to_string()),
        None,
    )))
}

/// Delete a service; options cascade at the schema level
#[utoipa::path(
    delete,
    path = "/api/category/{category_id}/service/{service_id}",
    params(
        ("category_id" = i32, Path, description = "Category id"),
        ("service_id" = i32, Path, description = "Service id")
    ),
    responses(
        (status = 200, description = "Service deleted successfully", body = ApiResponse<Object>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category or service not found")
    ),
    tag = "services",
    security(("bearer_auth" = []))
)]
pub async fn delete_service(
    State(service): State<Arc<ServiceCatalogService>>,
    Path((category_id, service_id)): Path<(i32, i32)>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(category_id, service_id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Service deleted successfully".to_string()),
        None,
    )))
}
