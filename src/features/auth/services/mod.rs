mod auth_service;
mod token_service;

pub use auth_service::{AuthService, CredentialVerifier, StaticCredentialVerifier};
pub use token_service::{TokenService, TokenVerification};
