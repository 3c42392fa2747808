//! Password hashing and bearer-token auth.
//!
//! Access and refresh tokens are JWTs signed with the configured secret.
//! The `sub` claim carries the user id; `token_type` distinguishes the two
//! so a refresh token cannot be replayed as an access token.

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::Config;
use crate::error::ApiError;
use crate::main_lib::AppState;

pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const TOKEN_TYPE_REFRESH: &str = "refresh";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub token_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl AuthManager {
    pub fn new(config: &Config) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret_key.as_bytes()),
            access_ttl: Duration::minutes(config.access_token_minutes),
            refresh_ttl: Duration::days(config.refresh_token_days),
        }
    }

    pub fn hash_password(&self, password: &str) -> Result<String, ApiError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| {
                ApiError::Core(wealthtrack_core::Error::Unexpected(format!(
                    "password hashing failed: {err}"
                )))
            })
    }

    pub fn verify_password(&self, password: &str, password_hash: &str) -> bool {
        PasswordHash::new(password_hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    pub fn issue_tokens(&self, user_id: &str) -> Result<TokenPair, ApiError> {
        Ok(TokenPair {
            access_token: self.issue(user_id, TOKEN_TYPE_ACCESS, self.access_ttl)?,
            refresh_token: self.issue(user_id, TOKEN_TYPE_REFRESH, self.refresh_ttl)?,
            token_type: "bearer".to_string(),
        })
    }

    fn issue(&self, user_id: &str, token_type: &str, ttl: Duration) -> Result<String, ApiError> {
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (Utc::now() + ttl).timestamp(),
            token_type: token_type.to_string(),
        };
        encode(&Header::default(), &claims, &self.encoding_key).map_err(|err| {
            ApiError::Core(wealthtrack_core::Error::Unexpected(format!(
                "token signing failed: {err}"
            )))
        })
    }

    /// Returns the user id carried by a valid token of the expected type.
    pub fn verify_token(&self, token: &str, expected_type: &str) -> Option<String> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default()).ok()?;
        if data.claims.token_type != expected_type {
            return None;
        }
        Some(data.claims.sub)
    }
}

/// Extractor for the authenticated user id.
pub struct AuthUser(pub String);

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| ApiError::unauthorized("Missing bearer token"))?;
        let user_id = state
            .auth
            .verify_token(token, TOKEN_TYPE_ACCESS)
            .ok_or_else(|| ApiError::unauthorized("Invalid or expired token"))?;
        Ok(AuthUser(user_id))
    }
}
