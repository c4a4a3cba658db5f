//! Shared helpers for API integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use fusteria_api::auth::jwt::{generate_access_token, JwtConfig};
use fusteria_api::auth::password::hash_password;
use fusteria_api::config::ServerConfig;
use fusteria_api::router::build_app_router;
use fusteria_api::state::AppState;
use fusteria_api::views::ViewStamps;
use fusteria_db::models::user::{CreateUser, User};
use fusteria_db::repositories::UserRepo;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and a fixed JWT secret so tests can mint
/// their own tokens.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        views: Arc::new(ViewStamps::new()),
    };

    build_app_router(state, &config)
}

/// Mint an access token for an arbitrary user identity, signed with the
/// test secret. The user does not need to exist in the database unless
/// the handler under test looks it up.
pub fn auth_token(user_id: i64, name: &str) -> String {
    generate_access_token(user_id, name, &test_config().jwt).expect("token generation")
}

/// Seed a user with the given password and return the row.
pub async fn seed_user(pool: &PgPool, name: &str, email: &str, password: &str) -> User {
    let password_hash = hash_password(password).expect("hashing");
    UserRepo::create(
        pool,
        &CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
        },
    )
    .await
    .expect("user insert")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a request with a JSON body and optional bearer token.
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a request with a urlencoded form body and optional bearer token.
pub async fn send_form(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    fields: &[(&str, &str)],
) -> Response<Body> {
    let body = serde_urlencoded::to_string(fields).expect("form encoding");
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body)).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a bodyless request (DELETE and friends) with an optional token.
pub async fn send(app: Router, method: &str, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a response has the expected status and return its JSON body.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
