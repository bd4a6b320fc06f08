//! Route definitions for resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::resource;
use crate::state::AppState;

/// ```text
/// POST   /recurso                    -> create
/// GET    /recurso?id=                -> get_by_id
/// PUT    /recurso                    -> update
/// DELETE /recurso?id=                -> delete
/// GET    /recursos                   -> list
/// GET    /recursos-disponiveis?id=   -> list_available
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/recurso",
            post(resource::create)
                .get(resource::get_by_id)
                .put(resource::update)
                .delete(resource::delete),
        )
        .route("/recursos", get(resource::list))
        .route("/recursos-disponiveis", get(resource::list_available))
}
