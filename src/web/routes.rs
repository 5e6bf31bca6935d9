//! Router assembly and request handlers.
//!
//! Route groups by access level:
//! - `POST /v1/auth/login` is public;
//! - agent reads require any authenticated principal;
//! - user CRUD and agent writes require the ADMIN role.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{get, patch, post},
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use uuid::Uuid;

use crate::agent::AgentRecord;
use crate::agent::api::{AgentFilter, AgentPost, AgentUpdate};
use crate::auth::auth_body::AuthBody;
use crate::prelude::*;
use crate::principal::ADMIN_ONLY;
use crate::require_role;
use crate::user::api::{UserApi, UserFilter, UserPost, UserUpdate};

use super::ApiState;
use super::auth::{LoginRequest, login_user};
use super::ctx::mw_ctx_resolver;
use super::mw_auth::mw_require_auth;

pub fn router(state: ApiState) -> Router {
    let admin = Router::new()
        .route("/users", post(create_user).get(list_users))
        .route(
            "/users/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        .route("/agents", post(create_agent))
        .route("/agents/{id}", patch(update_agent).delete(delete_agent))
        .route_layer(require_role!(ADMIN_ONLY));

    let authed = Router::new()
        .route("/agents", get(list_agents))
        .route("/agents/{id}", get(get_agent));

    let api = admin
        .merge(authed)
        .route_layer(middleware::from_fn(mw_require_auth))
        .route("/auth/login", post(login));

    Router::new()
        .nest("/v1", api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            mw_ctx_resolver,
        ))
        .with_state(state)
}

#[axum::debug_handler]
async fn login(
    State(state): State<ApiState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthBody>> {
    Ok(Json(login_user(&state, &payload)?))
}

/* Users (admin only) */

#[axum::debug_handler]
async fn create_user(
    State(state): State<ApiState>,
    Json(payload): Json<UserPost>,
) -> Result<(StatusCode, Json<UserApi>)> {
    let user = payload.persist(state.users.as_ref())?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[axum::debug_handler]
async fn list_users(
    State(state): State<ApiState>,
    Query(filter): Query<UserFilter>,
) -> Result<Json<Vec<UserApi>>> {
    let users = state.users.list(&filter);
    Ok(Json(users.into_iter().map(UserApi::from).collect()))
}

#[axum::debug_handler]
async fn get_user(State(state): State<ApiState>, Path(id): Path<Uuid>) -> Result<Json<UserApi>> {
    let user = state.users.find_by_id(id).ok_or(Error::NotFound)?;
    Ok(Json(user.into()))
}

#[axum::debug_handler]
async fn update_user(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UserUpdate>,
) -> Result<Json<UserApi>> {
    Ok(Json(payload.apply(id, state.users.as_ref())?))
}

#[axum::debug_handler]
async fn delete_user(State(state): State<ApiState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    state.users.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/* Agents (reads: any authenticated; writes: admin only) */

#[axum::debug_handler]
async fn create_agent(
    State(state): State<ApiState>,
    Json(payload): Json<AgentPost>,
) -> Result<(StatusCode, Json<AgentRecord>)> {
    let agent = payload.persist(state.agents.as_ref())?;
    Ok((StatusCode::CREATED, Json(agent)))
}

#[axum::debug_handler]
async fn list_agents(
    State(state): State<ApiState>,
    Query(filter): Query<AgentFilter>,
) -> Result<Json<Vec<AgentRecord>>> {
    Ok(Json(state.agents.list(&filter)))
}

#[axum::debug_handler]
async fn get_agent(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AgentRecord>> {
    let agent = state.agents.find_by_id(id).ok_or(Error::NotFound)?;
    Ok(Json(agent))
}

#[axum::debug_handler]
async fn update_agent(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AgentUpdate>,
) -> Result<Json<AgentRecord>> {
    Ok(Json(payload.apply(id, state.agents.as_ref())?))
}

#[axum::debug_handler]
async fn delete_agent(State(state): State<ApiState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    state.agents.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
