//! Route definitions for projects and their resource links.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{project, project_resource};
use crate::state::AppState;

/// ```text
/// POST   /projeto                -> create
/// GET    /projeto?id=            -> get_by_id
/// PUT    /projeto                -> update
/// DELETE /projeto?id=            -> delete
/// GET    /projetos               -> list
///
/// POST   /projeto/recurso        -> link
/// DELETE /projeto/recurso        -> unlink
/// GET    /projeto/recursos?id=   -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/projeto",
            post(project::create)
                .get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/projetos", get(project::list))
        .route(
            "/projeto/recurso",
            post(project_resource::link).delete(project_resource::unlink),
        )
        .route("/projeto/recursos", get(project_resource::list))
}
