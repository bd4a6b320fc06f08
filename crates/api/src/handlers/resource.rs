//! Handlers for `/recurso`, `/recursos` and `/recursos-disponiveis`.

use axum::extract::State;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::resource::{
    CreateResource, Resource, ResourceRegistration, UpdateResource,
};
use portfolio_db::repositories::{ProjectResourceRepo, ResourceRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::query::IdQuery;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DeletedResource {
    pub id: DbId,
}

/// POST /recurso
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateResource>,
) -> AppResult<Json<MessageResponse<ResourceRegistration>>> {
    let registration = ResourceRepo::register(&state.pool, &input).await?;
    tracing::info!(
        resource_id = registration.resource.id,
        reused = registration.reused,
        project_id = ?input.project_id,
        "Resource registered"
    );

    let message = if registration.reused {
        "Existing resource reused"
    } else {
        "Resource created"
    };
    Ok(Json(MessageResponse::new(message, registration)))
}

/// GET /recursos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Resource>>>> {
    let resources = ResourceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: resources }))
}

/// GET /recurso?id=
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiQuery(IdQuery { id }): ApiQuery<IdQuery>,
) -> AppResult<Json<DataResponse<Resource>>> {
    let resource = ResourceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resource",
            id,
        }))?;
    Ok(Json(DataResponse { data: resource }))
}

/// GET /recursos-disponiveis?id=
///
/// Resources not linked to the given project.
pub async fn list_available(
    State(state): State<AppState>,
    ApiQuery(IdQuery { id }): ApiQuery<IdQuery>,
) -> AppResult<Json<DataResponse<Vec<Resource>>>> {
    let resources = ProjectResourceRepo::list_unlinked_resources(&state.pool, id).await?;
    Ok(Json(DataResponse { data: resources }))
}

/// PUT /recurso
pub async fn update(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<UpdateResource>,
) -> AppResult<Json<MessageResponse<Resource>>> {
    let resource = ResourceRepo::update(&state.pool, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resource",
            id: input.id,
        }))?;
    tracing::info!(resource_id = resource.id, "Resource updated");
    Ok(Json(MessageResponse::new("Resource updated", resource)))
}

/// DELETE /recurso?id=
pub async fn delete(
    State(state): State<AppState>,
    ApiQuery(IdQuery { id }): ApiQuery<IdQuery>,
) -> AppResult<Json<MessageResponse<DeletedResource>>> {
    ResourceRepo::delete(&state.pool, id).await?;
    tracing::info!(resource_id = id, "Resource deleted");
    Ok(Json(MessageResponse::new(
        "Resource deleted",
        DeletedResource { id },
    )))
}
