use sqlx::{PgConnection, PgPool};

use crate::core::error::{is_unique_violation, AppError, Result};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::models::Category;

const NAME_UNIQUE_CONSTRAINT: &str = "categories_name_key";

/// Service for category operations
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a category. The in-transaction existence check gives a friendly
    /// message; the unique constraint is the authoritative guard against
    /// concurrent duplicates.
    pub async fn create(&self, name: &str) -> Result<CategoryResponseDto> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_scalar::<_, i32>("SELECT id FROM categories WHERE name = $1")
            .bind(name)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to check category name: {:?}", e);
                AppError::Database(e)
            })?;

        if existing.is_some() {
            return Err(AppError::Conflict("Category already exists".to_string()));
        }

        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, NAME_UNIQUE_CONSTRAINT) {
                AppError::Conflict("Category already exists".to_string())
            } else {
                tracing::error!("Failed to create category: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tx.commit().await?;

        tracing::info!("Category created: id={}, name={}", category.id, category.name);

        Ok(category.into())
    }

    /// List all categories, newest first
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM categories
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Rename a category in place, preserving its id
    pub async fn update(&self, category_id: i32, name: &str) -> Result<CategoryResponseDto> {
        let mut tx = self.pool.begin().await?;

        Self::find_category(&mut tx, category_id).await?;

        let taken =
            sqlx::query_scalar::<_, i32>("SELECT id FROM categories WHERE name = $1 AND id <> $2")
                .bind(name)
                .bind(category_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check category name: {:?}", e);
                    AppError::Database(e)
                })?;

        if taken.is_some() {
            return Err(AppError::Conflict(
                "Category name already exists".to_string(),
            ));
        }

        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(category_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, NAME_UNIQUE_CONSTRAINT) {
                AppError::Conflict("Category name already exists".to_string())
            } else {
                tracing::error!("Failed to update category: {:?}", e);
                AppError::Database(e)
            }
        })?;

        tx.commit().await?;

        Ok(category.into())
    }

    /// Delete a category that owns no services. The schema cascade exists but
    /// is unreachable through the API because of this guard.
    pub async fn delete(&self, category_id: i32) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        Self::find_category(&mut tx, category_id).await?;

        let service_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM services WHERE category_id = $1")
                .bind(category_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to count services: {:?}", e);
                    AppError::Database(e)
                })?;

        if service_count > 0 {
            return Err(AppError::Conflict(
                "Cannot delete category with services".to_string(),
            ));
        }

        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(category_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category: {:?}", e);
                AppError::Database(e)
            })?;

        tx.commit().await?;

        tracing::info!("Category deleted: id={}", category_id);

        Ok(())
    }

    async fn find_category(conn: &mut PgConnection, category_id: i32) -> Result<()> {
        let found = sqlx::query_scalar::<_, i32>("SELECT id FROM categories WHERE id = $1")
            .bind(category_id)
            .fetch_optional(conn)
            .await
            .map_err(|e| {
                tracing::error!("Failed to look up category: {:?}", e);
                AppError::Database(e)
            })?;

        found
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }
}
