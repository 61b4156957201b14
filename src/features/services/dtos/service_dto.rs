use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::services::models::{Service, ServicePriceOption};

/// One price option in a create/update request. All fields are optional at
/// the serde level; presence is checked per entry so a single bad entry fails
/// the whole batch with the contract's message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceOptionDto {
    pub duration: Option<i32>,
    pub price: Option<Decimal>,
    #[serde(rename = "type")]
    pub option_type: Option<String>,
}

/// Request DTO for creating a service under a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceDto {
    #[validate(length(max = 255, message = "Service name must not exceed 255 characters"))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub service_type: Option<String>,
    pub price_options: Option<Vec<PriceOptionDto>>,
}

/// Request DTO for updating a service. `priceOptions` omitted means the
/// existing option set is left untouched; supplying an array replaces it
/// atomically.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceDto {
    #[validate(length(max = 255, message = "Service name must not exceed 255 characters"))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub service_type: Option<String>,
    pub price_options: Option<Vec<PriceOptionDto>>,
}

/// Response DTO for a price option
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceOptionResponseDto {
    pub id: i32,
    pub service_id: i32,
    pub duration: i32,
    pub price: Decimal,
    #[serde(rename = "type")]
    pub option_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ServicePriceOption> for PriceOptionResponseDto {
    fn from(o: ServicePriceOption) -> Self {
        Self {
            id: o.id,
            service_id: o.service_id,
            duration: o.duration,
            price: o.price,
            option_type: o.option_type,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

/// Response DTO for a service with its options eagerly loaded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponseDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub price_options: Vec<PriceOptionResponseDto>,
}

impl ServiceResponseDto {
    pub fn from_parts(service: Service, options: Vec<ServicePriceOption>) -> Self {
        Self {
            id: service.id,
            name: service.name,
            service_type: service.service_type,
            category_id: service.category_id,
            created_at: service.created_at,
            updated_at: service.updated_at,
            price_options: options.into_iter().map(|o| o.into()).collect(),
        }
    }
}
