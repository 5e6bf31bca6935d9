//! HTTP mapping for the crate error.

use crate::prelude::*;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            Error::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                format!("Invalid {field}: {message}"),
            ),
            Error::Conflict { field } => {
                (StatusCode::CONFLICT, format!("{field} already in use"))
            }
            Error::NotFound => (StatusCode::NOT_FOUND, String::from("Not found")),

            // Auth failures are deliberately undifferentiated so callers
            // cannot probe which emails exist or why a token was rejected.
            Error::WrongCredentials | Error::MissingCredentials | Error::AuthInvalidToken => {
                (StatusCode::UNAUTHORIZED, String::from("Invalid credentials"))
            }
            Error::AuthTokenMissing => (
                StatusCode::UNAUTHORIZED,
                String::from("Authentication required"),
            ),

            Error::ApiForbidden => (StatusCode::FORBIDDEN, String::from("Access forbidden")),

            // Internal errors - hide details
            Error::AuthTokenCreation
            | Error::Config(_)
            | Error::JWT(_)
            | Error::PasswordHash(_)
            | Error::CtxMissing => {
                tracing::error!("Internal error: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("Internal server error"),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "message": message,
                "status": status.as_u16()
            }
        }));
        (status, body).into_response()
    }
}
