//! Signed bearer tokens.
//!
//! Tokens are HS256 JWTs whose subject is the user's email. Validation checks the
//! signature, issuer and expiry; resolving the subject to a stored user is left to
//! the request filter.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, config::ConfigError, AppError},
    model::user::User,
};

const DEFAULT_ISSUER: &str = "catalog";
const DEFAULT_EXPIRATION_SECS: i64 = 86_400;
const DEFAULT_LEEWAY_SECS: u64 = 60;

/// Claims embedded in every issued token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the user's email.
    pub sub: String,
    /// Role name at issue time.
    pub role: String,
    pub iss: String,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `user` valid for `expires_in_secs` from now.
    pub fn for_user(user: &User, issuer: &str, expires_in_secs: i64) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: user.email.clone(),
            role: user.role.as_str().to_string(),
            iss: issuer.to_string(),
            iat: now,
            exp: now.saturating_add(expires_in_secs),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub expiration_secs: i64,
    pub leeway_secs: u64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: DEFAULT_ISSUER.to_string(),
            expiration_secs: DEFAULT_EXPIRATION_SECS,
            leeway_secs: DEFAULT_LEEWAY_SECS,
        }
    }

    pub fn with_expiration(mut self, expiration_secs: i64) -> Self {
        self.expiration_secs = expiration_secs;
        self
    }
}

/// Issues and validates tokens with keys built once at startup.
#[derive(Clone)]
pub struct JwtManager {
    config: Arc<JwtConfig>,
    encoding_key: Arc<EncodingKey>,
    decoding_key: Arc<DecodingKey>,
    validation: Arc<Validation>,
}

impl JwtManager {
    /// Builds a manager from `config`.
    ///
    /// # Returns
    /// - `Ok(JwtManager)` - Manager ready to sign and validate tokens
    /// - `Err(AppError::ConfigErr)` - The secret is empty
    pub fn new(config: JwtConfig) -> Result<Self, AppError> {
        if config.secret.is_empty() {
            return Err(ConfigError::MissingEnvVar("JWT_SECRET".to_string()).into());
        }
        if config.secret.len() < 32 {
            tracing::warn!("JWT secret is shorter than recommended (32 bytes)");
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.leeway = config.leeway_secs;

        Ok(Self {
            config: Arc::new(config),
            encoding_key: Arc::new(encoding_key),
            decoding_key: Arc::new(decoding_key),
            validation: Arc::new(validation),
        })
    }

    /// Signs arbitrary claims.
    pub fn create_token(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(AuthError::TokenCreation)
    }

    /// Issues a token for `user` using the configured issuer and lifetime.
    pub fn issue_for(&self, user: &User) -> Result<String, AuthError> {
        let claims = Claims::for_user(user, &self.config.issuer, self.config.expiration_secs);
        self.create_token(&claims)
    }

    /// Verifies signature, issuer and expiry, returning the embedded claims.
    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(AuthError::InvalidToken)
    }

    pub fn issuer(&self) -> &str {
        &self.config.issuer
    }
}
