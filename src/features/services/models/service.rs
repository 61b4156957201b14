use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for service
#[derive(Debug, Clone, FromRow)]
pub struct Service {
    pub id: i32,
    pub name: String,
    #[sqlx(rename = "type")]
    pub service_type: String,
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Service tier. Rows store the textual form, backed by a CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Normal,
    Vip,
}

impl ServiceType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Normal" => Some(Self::Normal),
            "VIP" => Some(Self::Vip),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Vip => "VIP",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_exact_variants_only() {
        assert_eq!(ServiceType::parse("Normal"), Some(ServiceType::Normal));
        assert_eq!(ServiceType::parse("VIP"), Some(ServiceType::Vip));
        assert_eq!(ServiceType::parse("vip"), None);
        assert_eq!(ServiceType::parse("Premium"), None);
    }
}
