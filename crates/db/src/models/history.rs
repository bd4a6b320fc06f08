//! History entry model and DTOs.

use portfolio_core::error::CoreError;
use portfolio_core::history::validate_description;
use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `histories` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct History {
    pub id: DbId,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "data_insercao")]
    pub inserted_at: Timestamp,
    #[serde(rename = "projeto_id")]
    pub project_id: DbId,
}

/// DTO for appending a history entry to a project.
///
/// `inserted_at` defaults to the server clock when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHistory {
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "data_insercao", default)]
    pub inserted_at: Option<Timestamp>,
}

impl CreateHistory {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_description(&self.description)
    }
}
