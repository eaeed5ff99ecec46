pub mod credentials;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::{JwtConfig, MAX_EXPIRATION_MINUTES};

pub use credentials::{CredentialVerifier, StaticCredentials};

/// Claims carried by every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub jti: String,
    pub iat: i64,
    pub username: String,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Invalid JWT secret")]
    InvalidSecret,

    #[error("Token lifetime must be between 1 and {max} minutes, got {0}", max = MAX_EXPIRATION_MINUTES)]
    InvalidLifetime(i64),

    #[error("Cannot issue a token for an empty username")]
    EmptyUsername,

    #[error("JWT generation error: {0}")]
    TokenGeneration(#[source] jsonwebtoken::errors::Error),

    #[error("Token has expired")]
    Expired,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Invalid JWT token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
}

/// Mints HS256 session tokens. Built once at startup from `JwtConfig`.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    header: Header,
    issuer: Option<String>,
    audience: Option<String>,
    subject: Option<String>,
    lifetime: Duration,
}

impl TokenIssuer {
    pub fn new(config: &JwtConfig) -> Result<Self, JwtError> {
        if config.key.trim().is_empty() {
            return Err(JwtError::InvalidSecret);
        }

        let minutes = config.expiration_minutes;
        if !(1..=MAX_EXPIRATION_MINUTES).contains(&minutes) {
            return Err(JwtError::InvalidLifetime(minutes));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.key.as_bytes()),
            header: Header::new(Algorithm::HS256),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            subject: config.subject.clone(),
            lifetime: Duration::minutes(minutes),
        })
    }

    /// Token lifetime in whole seconds.
    pub fn lifetime_secs(&self) -> i64 {
        self.lifetime.num_seconds()
    }

    pub fn issue(&self, username: &str) -> Result<String, JwtError> {
        self.issue_at(username, Utc::now())
    }

    pub fn issue_at(&self, username: &str, now: DateTime<Utc>) -> Result<String, JwtError> {
        let claims = self.claims_at(username, now)?;
        encode(&self.header, &claims, &self.encoding_key).map_err(JwtError::TokenGeneration)
    }

    pub fn claims_at(&self, username: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        if username.is_empty() {
            return Err(JwtError::EmptyUsername);
        }

        let iat = now.timestamp();
        Ok(Claims {
            sub: self.subject.clone().unwrap_or_else(|| username.to_string()),
            jti: Uuid::new_v4().to_string(),
            iat,
            username: username.to_string(),
            exp: iat + self.lifetime_secs(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        })
    }
}

/// Verifies tokens minted by a `TokenIssuer` sharing the same key.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(config: &JwtConfig) -> Result<Self, JwtError> {
        if config.key.trim().is_empty() {
            return Err(JwtError::InvalidSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_secs;
        validation.set_required_spec_claims(&["exp", "sub"]);
        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.key.as_bytes()),
            validation,
        })
    }

    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::Expired,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::InvalidToken(e),
            })
    }
}
