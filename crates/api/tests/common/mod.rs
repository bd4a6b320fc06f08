#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use portfolio_api::config::ServerConfig;
use portfolio_api::exchange::ExchangeClient;
use portfolio_api::router::build_app_router;
use portfolio_api::state::AppState;

/// Exchange service address that refuses connections.
pub const UNREACHABLE_EXCHANGE_URL: &str = "http://127.0.0.1:9";

/// Build a test `ServerConfig` with safe defaults.
///
/// The exchange-rate URL points at a closed local port so no test reaches
/// the public service.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        exchange_api_url: UNREACHABLE_EXCHANGE_URL.to_string(),
        exchange_timeout_secs: 2,
    }
}

/// Build the production router on top of the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_exchange(pool, UNREACHABLE_EXCHANGE_URL)
}

/// Build the production router with the exchange client aimed at `exchange_url`.
pub fn build_test_app_with_exchange(pool: PgPool, exchange_url: &str) -> Router {
    let config = ServerConfig {
        exchange_api_url: exchange_url.to_string(),
        ..test_config()
    };
    let exchange = ExchangeClient::new(
        config.exchange_api_url.clone(),
        Duration::from_secs(config.exchange_timeout_secs),
    )
    .unwrap();

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        exchange: Arc::new(exchange),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn project_body(name: &str, acronym: &str, cost: f64) -> serde_json::Value {
    serde_json::json!({
        "nome": name,
        "sigla": acronym,
        "descricao": "Projeto de teste",
        "tipo": "Interno",
        "custo": cost,
        "status": "Em andamento"
    })
}

/// Create a project through the API and return its id.
pub async fn create_project(pool: &PgPool, name: &str, acronym: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/projeto",
        project_body(name, acronym, 100.0),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a resource through the API and return its id.
pub async fn create_resource(pool: &PgPool, name: &str, role: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/recurso",
        serde_json::json!({"nome": name, "papel": role}),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
