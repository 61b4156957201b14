use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{LoginDto, LoginResponseDto};
use crate::features::auth::services::AuthService;

/// Login with the administrative credentials
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponseDto),
        (status = 400, description = "Missing email or password"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginDto>,
) -> Result<Json<LoginResponseDto>> {
    let email = dto.email.as_deref().filter(|s| !s.is_empty());
    let password = dto.password.as_deref().filter(|s| !s.is_empty());

    let (Some(email), Some(password)) = (email, password) else {
        return Err(AppError::Validation(
            "Please provide email and password".to_string(),
        ));
    };

    let token = service.login(email, password).await?;

    Ok(Json(LoginResponseDto {
        success: true,
        message: "Login successful".to_string(),
        token,
    }))
}
