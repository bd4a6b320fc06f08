//! Handlers for `/projeto` and `/projetos`.

use axum::extract::State;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_db::models::project::{
    CreateProject, Project, ProjectDeletion, ProjectWithHistory, UpdateProject,
};
use portfolio_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::query::IdQuery;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /projeto
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateProject>,
) -> AppResult<Json<MessageResponse<ProjectWithHistory>>> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, acronym = %project.acronym, "Project created");

    Ok(Json(MessageResponse::new(
        "Project created",
        ProjectWithHistory {
            project,
            history: Vec::new(),
        },
    )))
}

/// GET /projetos
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProjectWithHistory>>>> {
    let projects = ProjectRepo::list_with_history(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /projeto?id=
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiQuery(IdQuery { id }): ApiQuery<IdQuery>,
) -> AppResult<Json<DataResponse<ProjectWithHistory>>> {
    let project = ProjectRepo::find_by_id_with_history(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /projeto
pub async fn update(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<UpdateProject>,
) -> AppResult<Json<MessageResponse<Project>>> {
    let project = ProjectRepo::update(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, "Project updated");
    Ok(Json(MessageResponse::new("Project updated", project)))
}

/// DELETE /projeto?id=
pub async fn delete(
    State(state): State<AppState>,
    ApiQuery(IdQuery { id }): ApiQuery<IdQuery>,
) -> AppResult<Json<MessageResponse<ProjectDeletion>>> {
    let deletion = ProjectRepo::delete(&state.pool, id).await?;
    tracing::info!(
        project_id = id,
        history_removed = deletion.history_removed,
        links_removed = deletion.links_removed,
        "Project deleted"
    );
    Ok(Json(MessageResponse::new("Project deleted", deletion)))
}
