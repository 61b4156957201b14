use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::error::{AppError, Result};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i32,
    iat: i64,
    exp: i64,
}

/// Outcome of token verification. Expiry and all other validation failures
/// (bad signature, malformed token) are plain values, never errors, so callers
/// can branch without error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenVerification {
    Valid { principal_id: i32 },
    Expired,
    Invalid,
}

/// Issues and verifies HS256-signed identity tokens for the admin principal.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in: Duration,
}

impl TokenService {
    pub fn new(secret: &str, expires_in: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expires_in,
        }
    }

    /// Signs a token embedding the principal id and the configured lifetime.
    pub fn issue(&self, principal_id: i32) -> Result<String> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: principal_id,
            iat: now,
            exp: now + self.expires_in.as_secs() as i64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }

    /// Validates signature and expiry, returning the embedded principal id on
    /// success.
    pub fn verify(&self, token: &str) -> TokenVerification {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        match decode::<Claims>(token, &self.decoding_key, &validation) {
            Ok(data) => TokenVerification::Valid {
                principal_id: data.claims.sub,
            },
            Err(e) => match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenVerification::Expired,
                _ => TokenVerification::Invalid,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", Duration::from_secs(3600))
    }

    #[test]
    fn issued_token_verifies_as_valid() {
        let tokens = service();
        let token = tokens.issue(1).unwrap();
        assert_eq!(
            tokens.verify(&token),
            TokenVerification::Valid { principal_id: 1 }
        );
    }

    #[test]
    fn token_past_lifetime_is_expired_not_invalid() {
        let tokens = service();
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(tokens.verify(&token), TokenVerification::Expired);
    }

    #[test]
    fn malformed_token_is_invalid() {
        assert_eq!(service().verify("not-a-jwt"), TokenVerification::Invalid);
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() {
        let tokens = service();
        let other = TokenService::new("other-secret", Duration::from_secs(3600));
        let token = other.issue(1).unwrap();
        assert_eq!(tokens.verify(&token), TokenVerification::Invalid);
    }
}
