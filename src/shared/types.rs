use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard response envelope. Every endpoint reports `success` and a
/// `message`; collection endpoints additionally carry `data` and `count`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, count: Option<i64>) -> Self {
        Self {
            success: true,
            message,
            data,
            count,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            message,
            data: None,
            count: None,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_skips_absent_fields() {
        let response = ApiResponse::success(Some(vec![1, 2]), None, Some(2));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 2);
        assert!(json.get("message").is_none());
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn error_envelope_reports_failure() {
        let response = ApiResponse::<()>::error(Some("Something went wrong!".to_string()), None);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Something went wrong!");
        assert!(json.get("data").is_none());
    }
}
