//! Per-request authentication context.
//!
//! `mw_ctx_resolver` runs on every request: it pulls the Bearer token from
//! the Authorization header, verifies it, and stashes the outcome in the
//! request extensions. Route middleware and handlers then extract [`Ctx`]
//! without re-verifying anything.

use crate::auth::token::{AuthError, Claims};
use crate::prelude::*;
use crate::principal::Principal;

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use super::ApiState;

pub const AUTH_HEADER: &str = "Authorization";
pub const AUTH_HEADER_PREFIX: &str = "Bearer ";

#[derive(Clone, Debug)]
pub struct Ctx {
    pub principal: Principal,
}

impl Ctx {
    fn from_claims(claims: Claims) -> Self {
        Self {
            principal: Principal {
                id: claims.sub,
                email: claims.email,
                role: claims.role,
            },
        }
    }
}

#[axum::debug_middleware]
pub async fn mw_ctx_resolver(
    State(state): State<ApiState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let ctx = req
        .headers()
        .get(AUTH_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(AUTH_HEADER_PREFIX))
        .map(|s| s.to_string())
        .ok_or(AuthError::TokenMissing)
        .and_then(|token| state.tokens.verify(&token))
        .map(Ctx::from_claims);

    req.extensions_mut().insert(ctx);

    next.run(req).await
}

impl<S: Send + Sync> FromRequestParts<S> for Ctx {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        Ok(parts
            .extensions
            .get::<core::result::Result<Ctx, AuthError>>()
            .ok_or(Error::CtxMissing)?
            .clone()?)
    }
}
