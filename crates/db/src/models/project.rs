//! Project entity model and DTOs.

use portfolio_core::error::CoreError;
use portfolio_core::project::validate_project;
use portfolio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::history::History;

/// A row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "sigla")]
    pub acronym: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "tipo")]
    pub project_type: String,
    #[serde(rename = "custo")]
    pub cost: f64,
    pub status: String,
    #[serde(rename = "data_registro")]
    pub registered_at: Timestamp,
}

impl Project {
    /// Apply the fields present in `patch`, leaving the others untouched.
    pub fn apply(&mut self, patch: &UpdateProject) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(acronym) = &patch.acronym {
            self.acronym = acronym.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(project_type) = &patch.project_type {
            self.project_type = project_type.clone();
        }
        if let Some(cost) = patch.cost {
            self.cost = cost;
        }
        if let Some(status) = &patch.status {
            self.status = status.clone();
        }
    }

    /// Re-run the project rules against the current field values.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_project(&self.name, &self.acronym, self.cost)
    }
}

/// A project enriched with its history entries.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithHistory {
    #[serde(flatten)]
    pub project: Project,
    #[serde(rename = "historico")]
    pub history: Vec<History>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "sigla")]
    pub acronym: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "tipo")]
    pub project_type: String,
    #[serde(rename = "custo")]
    pub cost: f64,
    pub status: String,
}

impl CreateProject {
    /// Run the project rules before anything is written.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_project(&self.name, &self.acronym, self.cost)
    }
}

/// DTO for editing an existing project. Only fields that are present are
/// applied; `id` selects the row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub id: DbId,
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(rename = "sigla", default)]
    pub acronym: Option<String>,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "tipo", default)]
    pub project_type: Option<String>,
    #[serde(rename = "custo", default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Rows removed by a project delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectDeletion {
    #[serde(rename = "id")]
    pub project_id: DbId,
    #[serde(rename = "historicos_removidos")]
    pub history_removed: u64,
    #[serde(rename = "vinculos_removidos")]
    pub links_removed: u64,
}
