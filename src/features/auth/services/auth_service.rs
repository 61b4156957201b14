use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::core::config::AdminConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::services::TokenService;

/// Seam for credential verification. Only one implementation exists today, but
/// the login flow depends on the trait, not the static pair.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, email: &str, password: &str) -> bool;

    /// Identifier embedded in tokens issued for this principal.
    fn principal_id(&self) -> i32;
}

/// Verifies against the configuration-supplied admin credential pair.
pub struct StaticCredentialVerifier {
    email: String,
    password: String,
    principal_id: i32,
}

impl StaticCredentialVerifier {
    pub const ADMIN_ID: i32 = 1;

    pub fn new(config: AdminConfig) -> Self {
        Self {
            email: config.email,
            password: config.password,
            principal_id: Self::ADMIN_ID,
        }
    }
}

/// Comparison of fixed-length digests; timing does not depend on where the
/// inputs differ.
fn digests_match(supplied: &str, expected: &str) -> bool {
    Sha256::digest(supplied.as_bytes()) == Sha256::digest(expected.as_bytes())
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(&self, email: &str, password: &str) -> bool {
        let email_ok = digests_match(email, &self.email);
        let password_ok = digests_match(password, &self.password);
        email_ok && password_ok
    }

    fn principal_id(&self) -> i32 {
        self.principal_id
    }
}

/// Login orchestration: credential check, then token issuance.
pub struct AuthService {
    verifier: Arc<dyn CredentialVerifier>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, tokens: Arc<TokenService>) -> Self {
        Self { verifier, tokens }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        if !self.verifier.verify(email, password).await {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        self.tokens.issue(self.verifier.principal_id())
    }
}
