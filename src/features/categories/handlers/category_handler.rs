use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::categories::dtos::{CategoryResponseDto, UpsertCategoryDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ApiResponse;

/// Create a new category
#[utoipa::path(
    post,
    path = "/api/category",
    request_body = UpsertCategoryDto,
    responses(
        (status = 201, description = "Category created successfully", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Missing or duplicate name"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "categories",
    security(("bearer_auth" = []))
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<UpsertCategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let name = dto.required_name()?;

    let category = service.create(name).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(category),
            Some("Category created successfully".to_string()),
            None,
        )),
    ))
}

/// List all categories, newest first
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "categories",
    security(("bearer_auth" = []))
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list().await?;
    let count = categories.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(categories),
        Some("Categories retrieved successfully".to_string()),
        Some(count),
    )))
}

/// Rename a category
#[utoipa::path(
    put,
    path = "/api/category/{category_id}",
    params(("category_id" = i32, Path, description = "Category id")),
    request_body = UpsertCategoryDto,
    responses(
        (status = 200, description = "Category updated successfully", body = ApiResponse<CategoryResponseDto>),
        (status = 400, description = "Missing or duplicate name"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories",
    security(("bearer_auth" = []))
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    Path(category_id): Path<i32>,
    AppJson(dto): AppJson<UpsertCategoryDto>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let name = dto.required_name()?;

    let category = service.update(category_id, name).await?;
    Ok(Json(ApiResponse::success(
        Some(category),
        Some("Category updated successfully".to_string()),
        None,
    )))
}

/// Delete a category that owns no services
#[utoipa::path(
    delete,
    path = "/api/category/{category_id}",
    params(("category_id" = i32, Path, description = "Category id")),
    responses(
        (status = 200, description = "Category deleted successfully", body = ApiResponse<Object>),
        (status = 400, description = "Category still owns services"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories",
    security(("bearer_auth" = []))
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    Path(category_id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(category_id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Category deleted successfully".to_string()),
        None,
    )))
}
