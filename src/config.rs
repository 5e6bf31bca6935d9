//! Environment-driven configuration.

use std::fmt::Display;

use chrono::TimeDelta;

use crate::prelude::*;

const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60;
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Signing configuration for the token service.
pub struct AuthConfig {
    /// Shared HMAC secret. Required: startup must fail when it is unset
    /// rather than fall back to a known default.
    pub secret: String,
    /// Token validity window.
    pub token_ttl: TimeDelta,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self> {
        let secret = std::env::var("JWT_SECRET")
            .map_err(|_| Error::Config(String::from("JWT_SECRET must be set")))?;
        if secret.is_empty() {
            return Err(Error::Config(String::from("JWT_SECRET must not be empty")));
        }

        let minutes = match std::env::var("TOKEN_TTL_MINUTES") {
            Ok(raw) => raw
                .parse::<i64>()
                .map_err(|_| Error::Config(format!("Invalid TOKEN_TTL_MINUTES '{raw}'")))?,
            Err(_) => DEFAULT_TOKEN_TTL_MINUTES,
        };

        Ok(Self {
            secret,
            token_ttl: TimeDelta::minutes(minutes),
        })
    }
}

impl Display for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthConfig {{ secret: REDACTED, ttl: {} }}", self.token_ttl)
    }
}

/// Listener configuration for the server binary.
pub struct ServerConfig {
    pub bind_addr: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| String::from(DEFAULT_BIND_ADDR)),
        }
    }
}
