//! Handlers for `/projeto/recurso` and `/projeto/recursos`.

use axum::extract::State;
use axum::Json;
use portfolio_db::models::project_resource::{LinkOutcome, ProjectResource};
use portfolio_db::models::resource::Resource;
use portfolio_db::repositories::ProjectResourceRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::ApiQuery;
use crate::query::{IdQuery, LinkQuery};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Link payload with the outcome of the request.
#[derive(Debug, Serialize)]
pub struct LinkStatus {
    #[serde(flatten)]
    pub link: ProjectResource,
    pub status: LinkOutcome,
}

/// POST /projeto/recurso?id_projeto=&id_recurso=
pub async fn link(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LinkQuery>,
) -> AppResult<Json<MessageResponse<LinkStatus>>> {
    let outcome = ProjectResourceRepo::link(&state.pool, query.project_id, query.resource_id).await?;
    tracing::info!(
        project_id = query.project_id,
        resource_id = query.resource_id,
        ?outcome,
        "Resource link requested"
    );

    let message = match outcome {
        LinkOutcome::Linked => "Resource linked to project",
        LinkOutcome::AlreadyLinked => "Resource already linked to project",
    };
    Ok(Json(MessageResponse::new(
        message,
        LinkStatus {
            link: query.into(),
            status: outcome,
        },
    )))
}

/// DELETE /projeto/recurso?id_projeto=&id_recurso=
pub async fn unlink(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LinkQuery>,
) -> AppResult<Json<MessageResponse<ProjectResource>>> {
    ProjectResourceRepo::unlink(&state.pool, query.project_id, query.resource_id).await?;
    tracing::info!(
        project_id = query.project_id,
        resource_id = query.resource_id,
        "Resource unlinked from project"
    );
    Ok(Json(MessageResponse::new(
        "Resource unlinked from project",
        query.into(),
    )))
}

/// GET /projeto/recursos?id=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(IdQuery { id }): ApiQuery<IdQuery>,
) -> AppResult<Json<DataResponse<Vec<Resource>>>> {
    let resources = ProjectResourceRepo::list_resources(&state.pool, id).await?;
    Ok(Json(DataResponse { data: resources }))
}
