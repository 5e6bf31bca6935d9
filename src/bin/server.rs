use std::sync::Arc;

use staffd::auth::token::TokenService;
use staffd::config::{AuthConfig, ServerConfig};
use staffd::seed::seed_admin;
use staffd::store::MemStore;
use staffd::web::{ApiState, routes::router};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // No fallback secret: refuse to start without one.
    let auth_config = match AuthConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    };
    let server_config = ServerConfig::from_env();

    let store = Arc::new(MemStore::new());
    seed_admin(store.as_ref());

    let state = ApiState::new(store, TokenService::new(&auth_config));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&server_config.bind_addr)
        .await
        .unwrap();
    tracing::debug!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
