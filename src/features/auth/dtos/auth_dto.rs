use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request DTO for admin login. Fields are optional so that a missing field
/// surfaces as the contract's validation message rather than a decode error.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response DTO for a successful login. The token sits at the top level of the
/// body, outside the usual `data` envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub success: bool,
    pub message: String,
    pub token: String,
}
