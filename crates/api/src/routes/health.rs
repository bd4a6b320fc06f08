//! Liveness endpoint, mounted next to the API routes.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok`, or `degraded` when the database does not answer.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Exchange-rate service the conversion endpoint proxies to.
    pub exchange_api: String,
}

/// GET /health
async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = match portfolio_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            false
        }
    };

    Json(HealthReport {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        exchange_api: state.config.exchange_api_url.clone(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
