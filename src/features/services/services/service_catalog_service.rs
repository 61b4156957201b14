use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};

use crate::core::error::{AppError, Result};
use crate::features::services::dtos::{
    CreateServiceDto, PriceOptionDto, ServiceResponseDto, UpdateServiceDto,
};
use crate::features::services::models::{PriceOptionType, Service, ServicePriceOption, ServiceType};

/// A price option that passed per-entry validation and is ready to insert.
#[derive(Debug)]
struct NewPriceOption {
    duration: i32,
    price: Decimal,
    option_type: PriceOptionType,
}

/// Validates every entry up front; one bad entry fails the whole batch, so
/// nothing is staged for a request that cannot fully succeed.
fn validate_options(options: &[PriceOptionDto]) -> Result<Vec<NewPriceOption>> {
    options
        .iter()
        .map(|option| {
            let (Some(duration), Some(price), Some(option_type)) =
                (option.duration, option.price, option.option_type.as_deref())
            else {
                return Err(AppError::Validation(
                    "Duration, price and type are required for each price option".to_string(),
                ));
            };

            let option_type = PriceOptionType::parse(option_type).ok_or_else(|| {
                AppError::Validation(
                    "Price option type must be either Hourly, Weekly, or Monthly".to_string(),
                )
            })?;

            if duration < 1 {
                return Err(AppError::Validation(
                    "Price option duration must be at least 1".to_string(),
                ));
            }

            if price < Decimal::ZERO {
                return Err(AppError::Validation(
                    "Price option price must not be negative".to_string(),
                ));
            }

            if price.scale() > 2 {
                return Err(AppError::Validation(
                    "Price option price must have at most two decimal places".to_string(),
                ));
            }

            Ok(NewPriceOption {
                duration,
                price,
                option_type,
            })
        })
        .collect()
}

/// Service for catalog services and their price options. Multi-row writes run
/// inside one transaction; returning early before commit rolls everything
/// back.
pub struct ServiceCatalogService {
    pool: PgPool,
}

impl ServiceCatalogService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a service with at least one price option, all-or-nothing.
    pub async fn create(
        &self,
        category_id: i32,
        dto: CreateServiceDto,
    ) -> Result<ServiceResponseDto> {
        let name = dto.name.as_deref().filter(|s| !s.is_empty());
        let service_type = dto.service_type.as_deref().filter(|s| !s.is_empty());
        let options = dto.price_options.as_deref().filter(|o| !o.is_empty());

        let (Some(name), Some(service_type), Some(options)) = (name, service_type, options) else {
            return Err(AppError::Validation(
                "Name, type and at least one price option are required".to_string(),
            ));
        };

        let service_type = ServiceType::parse(service_type).ok_or_else(|| {
            AppError::Validation("Service type must be either Normal or VIP".to_string())
        })?;

        let options = validate_options(options)?;

        let mut tx = self.pool.begin().await?;

        Self::find_category(&mut tx, category_id).await?;

        let service_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO services (name, type, category_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(service_type.as_str())
        .bind(category_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create service: {:?}", e);
            AppError::Database(e)
        })?;

        for option in &options {
            Self::insert_option(&mut tx, service_id, option).await?;
        }

        let service = Self::load_service(&mut tx, service_id).await?;

        tx.commit().await?;

        tracing::info!(
            "Service created: id={}, category_id={}, options={}",
            service.id,
            category_id,
            service.price_options.len()
        );

        Ok(service)
    }

    /// List all services of a category with nested options, newest first.
    pub async fn list(&self, category_id: i32) -> Result<Vec<ServiceResponseDto>> {
        let mut conn = self.pool.acquire().await?;

        Self::find_category(&mut conn, category_id).await?;

        let services = sqlx::query_as::<_, Service>(
            r#"
            SELECT id, name, type, category_id, created_at, updated_at
            FROM services
            WHERE category_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(category_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list services: {:?}", e);
            AppError::Database(e)
        })?;

        let ids: Vec<i32> = services.iter().map(|s| s.id).collect();
        let options = sqlx::query_as::<_, ServicePriceOption>(
            r#"
            SELECT id, service_id, duration, price, type, created_at, updated_at
            FROM service_price_options
            WHERE service_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(&ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load price options: {:?}", e);
            AppError::Database(e)
        })?;

        let mut grouped: HashMap<i32, Vec<ServicePriceOption>> = HashMap::new();
        for option in options {
            grouped.entry(option.service_id).or_default().push(option);
        }

        Ok(services
            .into_iter()
            .map(|service| {
                let options = grouped.remove(&service.id).unwrap_or_default();
                ServiceResponseDto::from_parts(service, options)
            })
            .collect())
    }

    /// Update name/type; when `priceOptions` is supplied, atomically replace
    /// the whole option set. Any entry failure rolls back everything,
    /// including the staged name/type change.
    pub async fn update(
        &self,
        category_id: i32,
        service_id: i32,
        dto: UpdateServiceDto,
    ) -> Result<ServiceResponseDto> {
        let name = dto.name.as_deref().filter(|s| !s.is_empty());
        let service_type = dto.service_type.as_deref().filter(|s| !s.is_empty());

        let (Some(name), Some(service_type)) = (name, service_type) else {
            return Err(AppError::Validation("Name and type are required".to_string()));
        };

        let service_type = ServiceType::parse(service_type).ok_or_else(|| {
            AppError::Validation("Service type must be either Normal or VIP".to_string())
        })?;

        // Same minimum as create: a service can never end up with zero
        // options through the API.
        if let Some(options) = dto.price_options.as_deref() {
            if options.is_empty() {
                return Err(AppError::Validation(
                    "At least one price option is required".to_string(),
                ));
            }
        }
        let replacement = dto
            .price_options
            .as_deref()
            .map(validate_options)
            .transpose()?;

        let mut tx = self.pool.begin().await?;

        Self::find_category(&mut tx, category_id).await?;
        Self::find_scoped_service(&mut tx, category_id, service_id).await?;

        sqlx::query(
            r#"
            UPDATE services
            SET name = $1, type = $2, updated_at = NOW()
            WHERE id = $3
            "#,
        )
        .bind(name)
        .bind(service_type.as_str())
        .bind(service_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update service: {:?}", e);
            AppError::Database(e)
        })?;

        if let Some(options) = replacement {
            sqlx::query("DELETE FROM service_price_options WHERE service_id = $1")
                .bind(service_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to clear price options: {:?}", e);
                    AppError::Database(e)
                })?;

            for option in &options {
                Self::insert_option(&mut tx, service_id, option).await?;
            }
        }

        let service = Self::load_service(&mut tx, service_id).await?;

        tx.commit().await?;

        Ok(service)
    }

    /// Delete a service; its options cascade at the schema level.
    pub async fn delete(&self, category_id: i32, service_id: i32) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        Self::find_category(&mut tx, category_id).await?;
        Self::find_scoped_service(&mut tx, category_id, service_id).await?;

        sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(service_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete service: {:?}", e);
                AppError::Database(e)
            })?;

        tx.commit().await?;

        tracing::info!("Service deleted: id={}", service_id);

        Ok(())
    }

    async fn insert_option(
        conn: &mut PgConnection,
        service_id: i32,
        option: &NewPriceOption,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO service_price_options (service_id, duration, price, type)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(service_id)
        .bind(option.duration)
        .bind(option.price)
        .bind(option.option_type.as_str())
        .execute(conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert price option: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    /// Re-read a service with its options eagerly loaded, inside the caller's
    /// transaction so the staged writes are visible.
    async fn load_service(conn: &mut PgConnection, service_id: i32) -> Result<ServiceResponseDto> {
        let service = sqlx::query_as::<_, Service>(
            r#"
            SELECT id, name, type, category_id, created_at, updated_at
            FROM services
            WHERE id = $1
            "#,
        )
        .bind(service_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load service: {:?}", e);
            AppError::Database(e)
        })?;

        let options = sqlx::query_as::<_, ServicePriceOption>(
            r#"
            SELECT id, service_id, duration, price, type, created_at, updated_at
            FROM service_price_options
            WHERE service_id = $1
            ORDER BY id
            "#,
        )
        .bind(service_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load price options: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(ServiceResponseDto::from_parts(service, options))
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

    async fn find_scoped_service(
        conn: &mut PgConnection,
        category_id: i32,
        service_id: i32,
    ) -> Result<()> {
        let found = sqlx::query_scalar::<_, i32>(
            "SELECT id FROM services WHERE id = $1 AND category_id = $2",
        )
        .bind(service_id)
        .bind(category_id)
        .fetch_optional(conn)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up service: {:?}", e);
            AppError::Database(e)
        })?;

        found.map(|_| ()).ok_or_else(|| {
            AppError::NotFound("Service not found in the specified category".to_string())
        })
    }
}
