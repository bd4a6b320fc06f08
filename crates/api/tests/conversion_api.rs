//! HTTP-level tests for the currency conversion proxy.
//!
//! Successful lookups run against a local rates server that quotes only
//! USD, at a fixed rate of 0.25, and answers 502 for the `ERR` base
//! currency. The default test router points at a closed port.

mod common;

use std::collections::HashMap;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use common::{body_json, build_test_app_with_exchange};
use sqlx::PgPool;

/// `/latest` of the local rates server.
async fn latest(Query(params): Query<HashMap<String, String>>) -> Response {
    let from = params.get("from").cloned().unwrap_or_default();
    if from == "ERR" {
        return (StatusCode::BAD_GATEWAY, "upstream unavailable").into_response();
    }
    let amount: f64 = params
        .get("amount")
        .and_then(|a| a.parse().ok())
        .unwrap_or_default();

    Json(serde_json::json!({
        "amount": amount,
        "base": from,
        "date": "2025-06-02",
        "rates": { "USD": amount * 0.25 }
    }))
    .into_response()
}

/// Serve the rates stub on an ephemeral port and return its base URL.
async fn spawn_rates_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, Router::new().route("/latest", get(latest)))
            .await
            .unwrap();
    });
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Successful lookups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_conversion_returns_rate_for_target(pool: PgPool) {
    let rates_url = spawn_rates_server().await;
    let app = build_test_app_with_exchange(pool, &rates_url);

    let response = common::get(app, "/conversao?valor=100&de=BRL&para=USD").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        serde_json::json!({
            "valor_original": 100.0,
            "de": "BRL",
            "para": "USD",
            "valor_convertido": 25.0
        })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_conversion_defaults_to_brl_usd(pool: PgPool) {
    let rates_url = spawn_rates_server().await;
    let app = build_test_app_with_exchange(pool, &rates_url);

    let response = common::get(app, "/conversao?valor=8").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["de"], "BRL");
    assert_eq!(json["data"]["para"], "USD");
    assert_eq!(json["data"]["valor_convertido"], 2.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unquoted_target_currency_is_null(pool: PgPool) {
    let rates_url = spawn_rates_server().await;
    let app = build_test_app_with_exchange(pool, &rates_url);

    let response = common::get(app, "/conversao?valor=100&para=EUR").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["para"], "EUR");
    assert!(json["data"]["valor_convertido"].is_null());
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upstream_error_status_is_500(pool: PgPool) {
    let rates_url = spawn_rates_server().await;
    let app = build_test_app_with_exchange(pool, &rates_url);

    let response = common::get(app, "/conversao?valor=100&de=ERR").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_ERROR");
    assert_eq!(json["error"], "Failed to fetch exchange rate");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_amount_is_400(pool: PgPool) {
    let response = common::get(common::build_test_app(pool), "/conversao?de=BRL&para=USD").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("valor"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_numeric_amount_is_400(pool: PgPool) {
    let response = common::get(common::build_test_app(pool), "/conversao?valor=dez").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unreachable_exchange_service_is_500(pool: PgPool) {
    let response = common::get(common::build_test_app(pool), "/conversao?valor=100").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_ERROR");
    assert_eq!(json["error"], "Failed to fetch exchange rate");
}
