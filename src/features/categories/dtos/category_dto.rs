use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;

/// Request DTO for creating or renaming a category. The name is optional at
/// the serde level so a missing field maps to the contract's message instead
/// of a decode error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertCategoryDto {
    #[validate(length(max = 255, message = "Category name must not exceed 255 characters"))]
    pub name: Option<String>,
}

impl UpsertCategoryDto {
    /// The category name, exactly as supplied (no trimming, no case-folding).
    pub fn required_name(&self) -> Result<&str> {
        self.name
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Validation("Category name is required".to_string()))
    }
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
