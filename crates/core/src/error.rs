use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A unique constraint rejected the write.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// The operation is blocked by an existing relationship.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Resource {resource_id} is not linked to project {project_id}")]
    NotLinked { project_id: DbId, resource_id: DbId },

    /// A third-party service failed or answered with a non-success status.
    #[error("Upstream error: {0}")]
    Upstream(String),
}
