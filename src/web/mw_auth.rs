//! Route-level authentication and role gates.

use crate::prelude::*;
use crate::principal::{Role, authorize};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::ctx::Ctx;

/// Rejects the request unless the context resolver produced a valid
/// principal. Token verification failures surface here as 401.
pub async fn mw_require_auth(ctx: Result<Ctx>, req: Request, next: Next) -> Result<Response> {
    ctx?;
    Ok(next.run(req).await)
}

/// Rejects authenticated principals whose role is not in the required set.
pub async fn mw_require_role(
    State(required): State<&'static [Role]>,
    ctx: Ctx,
    req: Request,
    next: Next,
) -> Result<Response> {
    if !authorize(ctx.principal.role, required) {
        return Err(Error::ApiForbidden);
    }
    Ok(next.run(req).await)
}

#[macro_export]
macro_rules! require_role {
    ($roles:expr) => {{
        axum::middleware::from_fn_with_state($roles, $crate::web::mw_auth::mw_require_role)
    }};
}
