//! HTTP surface: state, middleware, routes, error mapping.

pub mod auth;
pub mod ctx;
pub mod error;
pub mod mw_auth;
pub mod routes;

use std::sync::Arc;

use crate::auth::token::TokenService;
use crate::store::{AgentStore, UserStore};

#[derive(Clone)]
pub struct ApiState {
    pub users: Arc<dyn UserStore>,
    pub agents: Arc<dyn AgentStore>,
    pub tokens: Arc<TokenService>,
}

impl ApiState {
    pub fn new<S>(store: Arc<S>, tokens: TokenService) -> Self
    where
        S: UserStore + AgentStore + 'static,
    {
        Self {
            users: store.clone(),
            agents: store,
            tokens: Arc::new(tokens),
        }
    }
}
