//! JWT token service
//!
//! Access and refresh tokens are signed with separate HS256 secrets and
//! carry a `token_type` claim, so one can never stand in for the other.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::Config;

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    /// Access token lifetime (minutes)
    pub access_minutes: i64,
    /// Refresh token lifetime (minutes)
    pub refresh_minutes: i64,
    pub issuer: String,
}

impl From<&Config> for JwtConfig {
    fn from(config: &Config) -> Self {
        Self {
            access_secret: config.jwt_secret.clone(),
            refresh_secret: config.refresh_secret.clone(),
            access_minutes: config.access_token_minutes,
            refresh_minutes: config.refresh_token_minutes,
            issuer: config.jwt_issuer.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT claims stored in the token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Employee id
    pub sub: String,
    pub token_type: TokenType,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// Token pair returned by login and refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Keys {
    fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// JWT token service
pub struct JwtService {
    config: JwtConfig,
    access: Keys,
    refresh: Keys,
}

impl JwtService {
    pub fn with_config(config: JwtConfig) -> Self {
        let access = Keys::from_secret(&config.access_secret);
        let refresh = Keys::from_secret(&config.refresh_secret);
        Self {
            config,
            access,
            refresh,
        }
    }

    fn keys(&self, token_type: TokenType) -> &Keys {
        match token_type {
            TokenType::Access => &self.access,
            TokenType::Refresh => &self.refresh,
        }
    }

    fn generate(&self, employee_id: Uuid, token_type: TokenType) -> Result<String, JwtError> {
        let minutes = match token_type {
            TokenType::Access => self.config.access_minutes,
            TokenType::Refresh => self.config.refresh_minutes,
        };
        let now = Utc::now();
        let claims = Claims {
            sub: employee_id.to_string(),
            token_type,
            exp: (now + Duration::minutes(minutes)).timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };
        encode(&Header::default(), &claims, &self.keys(token_type).encoding)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Issue a fresh access + refresh pair
    pub fn generate_pair(&self, employee_id: Uuid) -> Result<TokenPair, JwtError> {
        Ok(TokenPair {
            access_token: self.generate(employee_id, TokenType::Access)?,
            refresh_token: self.generate(employee_id, TokenType::Refresh)?,
            token_type: "Bearer".to_string(),
            expires_in: self.config.access_minutes * 60,
        })
    }

    /// Validate a token of the expected type
    pub fn validate(&self, token: &str, expected: TokenType) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss"]);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.keys(expected).decoding, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::InvalidToken(format!("Token validation failed: {e}")),
            })?;

        if token_data.claims.token_type != expected {
            return Err(JwtError::InvalidToken("Wrong token type".to_string()));
        }
        Ok(token_data.claims)
    }

    /// Extract the token from an Authorization header
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ").map(str::trim).filter(|t| !t.is_empty())
    }
}

/// Authenticated employee, inserted into request extensions by `require_auth`
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub id: Uuid,
}

impl TryFrom<Claims> for CurrentUser {
    type Error = JwtError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&claims.sub)
            .map_err(|_| JwtError::InvalidToken("Subject is not an employee id".to_string()))?;
        Ok(Self { id })
    }
}
