//! Shared query parameter types for API handlers.

use portfolio_core::types::DbId;
use portfolio_db::models::project_resource::ProjectResource;
use serde::Deserialize;

/// `?id=` parameter used by the single-entity endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IdQuery {
    pub id: DbId,
}

/// `?id_projeto=&id_recurso=` parameters of the link endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LinkQuery {
    #[serde(rename = "id_projeto")]
    pub project_id: DbId,
    #[serde(rename = "id_recurso")]
    pub resource_id: DbId,
}

impl From<LinkQuery> for ProjectResource {
    fn from(query: LinkQuery) -> Self {
        ProjectResource {
            project_id: query.project_id,
            resource_id: query.resource_id,
        }
    }
}

/// Raw `?valor=&de=&para=` parameters, parsed by `ConversionRequest::parse`.
#[derive(Debug, Deserialize)]
pub struct ConversionParams {
    pub valor: Option<String>,
    pub de: Option<String>,
    pub para: Option<String>,
}
