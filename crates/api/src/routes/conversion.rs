use axum::routing::get;
use axum::Router;

use crate::handlers::conversion;
use crate::state::AppState;

/// ```text
/// GET    /conversao?valor=&de=&para=   -> convert
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/conversao", get(conversion::convert))
}
