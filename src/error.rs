//! Main Crate Error

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Config {0}")]
    Config(String),

    #[error(transparent)]
    JWT(#[from] jsonwebtoken::errors::Error),

    #[error("PasswordHash {0}")]
    PasswordHash(argon2::password_hash::Error),

    /* Request errors */
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("{field} already in use")]
    Conflict { field: &'static str },
    #[error("Not Found")]
    NotFound,

    /* Api Errors */
    #[error("API Forbidden")]
    ApiForbidden,

    /* Auth Errors */
    #[error("Auth Token Missing")]
    AuthTokenMissing,
    #[error("Invalid Token")]
    AuthInvalidToken,
    #[error("Auth Token Creation")]
    AuthTokenCreation,
    #[error("Wrong Credentials")]
    WrongCredentials,
    #[error("Missing Credentials")]
    MissingCredentials,

    #[error("Context Missing")]
    CtxMissing,
}

impl Error {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}
