use axum::routing::post;
use axum::Router;

use crate::handlers::history;
use crate::state::AppState;

/// ```text
/// POST   /historico?id=   -> create
/// GET    /historico?id=   -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/historico", post(history::create).get(history::list))
}
