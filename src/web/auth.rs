//! Login glue between the HTTP layer and the auth core.

use serde::{Deserialize, Serialize};

use crate::auth::auth_body::AuthBody;
use crate::auth::authenticate;
use crate::prelude::*;

use super::ApiState;

#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Verifies credentials and issues a signed token for the principal.
pub fn login_user(state: &ApiState, request: &LoginRequest) -> Result<AuthBody> {
    let principal = authenticate(state.users.as_ref(), &request.email, &request.password)?;
    state.tokens.issue(&principal)
}
