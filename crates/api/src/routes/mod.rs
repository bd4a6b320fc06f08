pub mod conversion;
pub mod health;
pub mod history;
pub mod project;
pub mod resource;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree, mounted at the root.
///
/// Entity ids travel in the query string (`?id=`) or, for edits, in the
/// JSON body.
///
/// ```text
/// /projeto                       create (POST), get, edit (PUT), delete
/// /projetos                      list with history
/// /projeto/recurso               link (POST), unlink (DELETE)
/// /projeto/recursos              resources linked to a project
///
/// /historico                     append (POST), list for a project
///
/// /recurso                       create or reuse (POST), get, edit (PUT), delete
/// /recursos                      list
/// /recursos-disponiveis          resources not linked to a project
///
/// /conversao                     currency conversion
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(project::router())
        .merge(history::router())
        .merge(resource::router())
        .merge(conversion::router())
}
