//! Router-level tests: login, auth middleware, role gates, CRUD status
//! codes. Requests are driven through the router directly, no listener.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::TimeDelta;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use staffd::auth::token::TokenService;
use staffd::config::AuthConfig;
use staffd::seed::seed_admin;
use staffd::store::MemStore;
use staffd::web::{ApiState, routes::router};

fn app() -> Router {
    let store = Arc::new(MemStore::new());
    seed_admin(store.as_ref());
    let tokens = TokenService::new(&AuthConfig {
        secret: String::from("router-test-secret"),
        token_ttl: TimeDelta::minutes(60),
    });
    router(ApiState::new(store, tokens))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn login(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/v1/auth/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    assert_eq!(body["token_type"], "Bearer");
    body["access_token"].as_str().unwrap().to_string()
}

fn agent_payload(email: &str, cpf: &str) -> Value {
    json!({
        "name": "Joana Prado",
        "email": email,
        "cpf": cpf,
        "phone": "+55 11 98765-4321",
        "position": "Sales Manager",
        "department": "Sales",
        "hire_date": "2024-01-15"
    })
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/v1/auth/login",
        None,
        Some(json!({ "email": "admin@headoffice.com", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["message"], "Invalid credentials");

    // Unknown email gets the exact same answer.
    let (status, body) = send(
        &app,
        "POST",
        "/v1/auth/login",
        None,
        Some(json!({ "email": "ghost@headoffice.com", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = app();

    let (status, _) = send(&app, "GET", "/v1/users", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/v1/agents", Some("not-a-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_crud_over_users() {
    let app = app();
    let token = login(&app, "admin@headoffice.com", "Admin@123").await;

    let (status, created) = send(
        &app,
        "POST",
        "/v1/users",
        Some(&token),
        Some(json!({
            "name": "Maria Silva",
            "email": "Maria@Example.com",
            "password": "secret123",
            "cpf": "111.444.777-35"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["email"], "maria@example.com");
    assert_eq!(created["cpf"], "11144477735");
    assert_eq!(created["role"], "USER");
    assert!(created.get("hash").is_none());
    assert!(created.get("password").is_none());

    let id = created["id"].as_str().unwrap().to_string();

    let (status, listed) = send(&app, "GET", "/v1/users?search=maria", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, fetched) =
        send(&app, "GET", &format!("/v1/users/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Maria Silva");

    let (status, updated) = send(
        &app,
        "PATCH",
        &format!("/v1/users/{id}"),
        Some(&token),
        Some(json!({ "role": "ENTERPRISE" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["role"], "ENTERPRISE");

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/v1/users/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/v1/users/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn user_role_cannot_manage_users_or_write_agents() {
    let app = app();
    let admin = login(&app, "admin@headoffice.com", "Admin@123").await;

    let (status, _) = send(
        &app,
        "POST",
        "/v1/users",
        Some(&admin),
        Some(json!({
            "name": "Plain User",
            "email": "plain@example.com",
            "password": "secret123",
            "cpf": "11144477735"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let user = login(&app, "plain@example.com", "secret123").await;

    let (status, _) = send(&app, "GET", "/v1/users", Some(&user), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        "POST",
        "/v1/agents",
        Some(&user),
        Some(agent_payload("agent@example.com", "84106700034")),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Reads stay open to any authenticated principal.
    let (status, listed) = send(&app, "GET", "/v1/agents", Some(&user), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn agent_crud_and_filters() {
    let app = app();
    let admin = login(&app, "admin@headoffice.com", "Admin@123").await;

    let (status, created) = send(
        &app,
        "POST",
        "/v1/agents",
        Some(&admin),
        Some(agent_payload("Joana@Example.com", "111.444.777-35")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["email"], "joana@example.com");
    assert_eq!(created["cpf"], "11144477735");
    assert_eq!(created["status"], "ACTIVE");
    assert_eq!(created["hire_date"], "2024-01-15");

    let id = created["id"].as_str().unwrap().to_string();

    let (status, listed) = send(
        &app,
        "GET",
        "/v1/agents?department=sales&status=ACTIVE",
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, listed) = send(&app, "GET", "/v1/agents?search=nobody", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));

    let (status, updated) = send(
        &app,
        "PATCH",
        &format!("/v1/agents/{id}"),
        Some(&admin),
        Some(json!({ "status": "INACTIVE" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "INACTIVE");

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/v1/agents/{id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        "GET",
        &format!("/v1/agents/{id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn conflicts_and_validation_map_to_409_and_400() {
    let app = app();
    let admin = login(&app, "admin@headoffice.com", "Admin@123").await;

    let payload = json!({
        "name": "Maria Silva",
        "email": "maria@example.com",
        "password": "secret123",
        "cpf": "11144477735"
    });
    let (status, _) = send(&app, "POST", "/v1/users", Some(&admin), Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/v1/users", Some(&admin), Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "email already in use");

    let (status, body) = send(
        &app,
        "POST",
        "/v1/users",
        Some(&admin),
        Some(json!({
            "name": "Bad Cpf",
            "email": "bad@example.com",
            "password": "secret123",
            "cpf": "11144477736"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["status"], 400);

    let (status, _) = send(
        &app,
        "POST",
        "/v1/users",
        Some(&admin),
        Some(json!({
            "name": "Short Password",
            "email": "short@example.com",
            "password": "12345",
            "cpf": "84106700034"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn expired_token_is_rejected_by_the_middleware() {
    let store = Arc::new(MemStore::new());
    seed_admin(store.as_ref());
    let tokens = TokenService::new(&AuthConfig {
        secret: String::from("router-test-secret"),
        token_ttl: TimeDelta::minutes(-5),
    });
    let app = router(ApiState::new(store, tokens));

    let (status, body) = send(
        &app,
        "POST",
        "/v1/auth/login",
        None,
        Some(json!({ "email": "admin@headoffice.com", "password": "Admin@123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["access_token"].as_str().unwrap().to_string();

    let (status, _) = send(&app, "GET", "/v1/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
