//! Signed-token issuance and verification.
//!
//! Tokens are HS256 JWTs carrying `{sub, email, role, iat, exp}`. The
//! signing secret and validity window come from [`AuthConfig`]; there is no
//! fallback secret, a missing secret fails startup instead.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::prelude::*;
use crate::principal::{Principal, Role};

use super::auth_body::AuthBody;

/// Claims carried by every issued token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Errors a verification path can stash in request extensions.
///
/// Deliberately coarse: any structural, cryptographic, or expiry failure is
/// [`AuthError::InvalidToken`], so no detail about the cause leaks out.
#[derive(Debug, thiserror::Error, Clone)]
pub enum AuthError {
    #[error("Invalid Token")]
    InvalidToken,
    #[error("Token Missing")]
    TokenMissing,
}

impl From<AuthError> for Error {
    fn from(value: AuthError) -> Self {
        match value {
            AuthError::InvalidToken => Self::AuthInvalidToken,
            AuthError::TokenMissing => Self::AuthTokenMissing,
        }
    }
}

/// Key pair plus validation rules, built once at startup and shared.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    token_ttl: chrono::TimeDelta,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // An expired token must be rejected as soon as exp elapses.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            token_ttl: config.token_ttl,
        }
    }

    /// Issues a signed token for an authenticated principal.
    pub fn issue(&self, principal: &Principal) -> Result<AuthBody> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(self.token_ttl)
            .ok_or(Error::AuthTokenCreation)?;

        let claims = Claims {
            sub: principal.id,
            email: principal.email.clone(),
            role: principal.role,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| {
                log::error!("Failed to encode JWT {err}");
                Error::JWT(err)
            })?;

        Ok(AuthBody::new(token))
    }

    /// Verifies signature and expiry, returning the claims on success.
    ///
    /// Fails closed: every failure collapses to [`AuthError::InvalidToken`].
    pub fn verify(&self, token: &str) -> core::result::Result<Claims, AuthError> {
        Ok(decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|err| {
                log::error!("Failed to decode jwt token {err}");
                AuthError::InvalidToken
            })?
            .claims)
    }
}
