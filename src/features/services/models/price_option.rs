use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for a priced duration option of a service
#[derive(Debug, Clone, FromRow)]
pub struct ServicePriceOption {
    pub id: i32,
    pub service_id: i32,
    pub duration: i32,
    pub price: Decimal,
    #[sqlx(rename = "type")]
    pub option_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Billing cadence of a price option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceOptionType {
    Hourly,
    Weekly,
    Monthly,
}

impl PriceOptionType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Hourly" => Some(Self::Hourly),
            "Weekly" => Some(Self::Weekly),
            "Monthly" => Some(Self::Monthly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "Hourly",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}
