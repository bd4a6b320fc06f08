//! Resource entity model and DTOs.

use portfolio_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::project_resource::LinkOutcome;

/// A row from the `resources` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Resource {
    pub id: DbId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "papel")]
    pub role: String,
    #[serde(rename = "alocacao")]
    pub allocation: Option<String>,
}

/// DTO for registering a resource, optionally linking it to a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResource {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "papel")]
    pub role: String,
    #[serde(rename = "alocacao", default)]
    pub allocation: Option<String>,
    #[serde(rename = "projeto_id", default)]
    pub project_id: Option<DbId>,
}

/// DTO for editing a resource. Only present fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateResource {
    pub id: DbId,
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(rename = "papel", default)]
    pub role: Option<String>,
    #[serde(rename = "alocacao", default)]
    pub allocation: Option<String>,
}

/// Result of [`ResourceRepo::register`](crate::repositories::ResourceRepo::register).
#[derive(Debug, Clone, Serialize)]
pub struct ResourceRegistration {
    #[serde(flatten)]
    pub resource: Resource,
    /// `true` when an existing resource with the same name and role was
    /// returned instead of inserting a new row.
    pub reused: bool,
    /// Set when the request asked for a project link.
    #[serde(rename = "vinculo", skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkOutcome>,
}
