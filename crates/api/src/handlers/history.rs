//! Handlers for `/historico`.

use axum::extract::State;
use axum::Json;
use portfolio_core::types::DbId;
use portfolio_db::models::history::{CreateHistory, History};
use portfolio_db::repositories::HistoryRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::query::IdQuery;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// History of a single project.
#[derive(Debug, Serialize)]
pub struct ProjectHistory {
    #[serde(rename = "projeto_id")]
    pub project_id: DbId,
    #[serde(rename = "historico")]
    pub history: Vec<History>,
}

/// POST /historico?id=
pub async fn create(
    State(state): State<AppState>,
    ApiQuery(IdQuery { id }): ApiQuery<IdQuery>,
    ApiJson(input): ApiJson<CreateHistory>,
) -> AppResult<Json<MessageResponse<History>>> {
    let history = HistoryRepo::create(&state.pool, id, &input).await?;
    tracing::info!(project_id = id, history_id = history.id, "History entry added");
    Ok(Json(MessageResponse::new("History entry added", history)))
}

/// GET /historico?id=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(IdQuery { id }): ApiQuery<IdQuery>,
) -> AppResult<Json<DataResponse<ProjectHistory>>> {
    let history = HistoryRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: ProjectHistory {
            project_id: id,
            history,
        },
    }))
}
