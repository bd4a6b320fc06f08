//! Project-resource junction model.

use portfolio_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `project_resources` junction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize)]
pub struct ProjectResource {
    #[serde(rename = "projeto_id")]
    pub project_id: DbId,
    #[serde(rename = "recurso_id")]
    pub resource_id: DbId,
}

/// Outcome of a link request. Both variants are successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkOutcome {
    Linked,
    AlreadyLinked,
}
