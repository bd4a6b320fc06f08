//! Repository for the `project_resources` junction table.
//!
//! Linking is idempotent; unlinking a pair that is not linked is an error.

use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::project_resource::LinkOutcome;
use crate::models::resource::Resource;
use crate::repositories::{ProjectRepo, ResourceRepo};

/// Column list for the `resources` table (used in JOIN queries).
const RESOURCE_COLUMNS: &str = "r.id, r.name, r.role, r.allocation";

/// Provides link management between projects and resources.
pub struct ProjectResourceRepo;

impl ProjectResourceRepo {
    /// Link a resource to a project.
    ///
    /// Returns [`LinkOutcome::AlreadyLinked`] without writing when the pair
    /// is already linked.
    pub async fn link(
        pool: &PgPool,
        project_id: DbId,
        resource_id: DbId,
    ) -> Result<LinkOutcome, RepoError> {
        let mut tx = pool.begin().await?;
        Self::require_pair(&mut tx, project_id, resource_id).await?;
        let outcome = Self::insert_link(&mut tx, project_id, resource_id).await?;
        tx.commit().await?;
        Ok(outcome)
    }

    /// Remove the link between a resource and a project.
    ///
    /// Fails with [`CoreError::NotLinked`] if the pair was not linked.
    pub async fn unlink(pool: &PgPool, project_id: DbId, resource_id: DbId) -> Result<(), RepoError> {
        let mut tx = pool.begin().await?;
        Self::require_pair(&mut tx, project_id, resource_id).await?;

        let result =
            sqlx::query("DELETE FROM project_resources WHERE project_id = $1 AND resource_id = $2")
                .bind(project_id)
                .bind(resource_id)
                .execute(&mut *tx)
                .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotLinked {
                project_id,
                resource_id,
            }
            .into());
        }

        tx.commit().await?;
        Ok(())
    }

    /// Resources linked to a project, ordered by resource ID.
    pub async fn list_resources(pool: &PgPool, project_id: DbId) -> Result<Vec<Resource>, RepoError> {
        Self::require_project(pool, project_id).await?;

        let query = format!(
            "SELECT {RESOURCE_COLUMNS} \
             FROM project_resources pr \
             JOIN resources r ON r.id = pr.resource_id \
             WHERE pr.project_id = $1 \
             ORDER BY r.id"
        );
        Ok(sqlx::query_as::<_, Resource>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await?)
    }

    /// Resources with no link to a project, ordered by resource ID.
    pub async fn list_unlinked_resources(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Resource>, RepoError> {
        Self::require_project(pool, project_id).await?;

        let query = format!(
            "SELECT {RESOURCE_COLUMNS} \
             FROM resources r \
             WHERE NOT EXISTS ( \
                 SELECT 1 FROM project_resources pr \
                 WHERE pr.resource_id = r.id AND pr.project_id = $1 \
             ) \
             ORDER BY r.id"
        );
        Ok(sqlx::query_as::<_, Resource>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await?)
    }

    /// Whether a project and resource are linked.
    pub async fn is_linked(
        pool: &PgPool,
        project_id: DbId,
        resource_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS( \
                 SELECT 1 FROM project_resources WHERE project_id = $1 AND resource_id = $2 \
             )",
        )
        .bind(project_id)
        .bind(resource_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Number of projects a resource is linked to.
    pub async fn count_for_resource(pool: &PgPool, resource_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM project_resources WHERE resource_id = $1")
                .bind(resource_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Insert a link inside `tx`. Both rows must already be known to exist.
    pub(crate) async fn insert_link(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        project_id: DbId,
        resource_id: DbId,
    ) -> Result<LinkOutcome, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO project_resources (project_id, resource_id) \
             VALUES ($1, $2) \
             ON CONFLICT (project_id, resource_id) DO NOTHING",
        )
        .bind(project_id)
        .bind(resource_id)
        .execute(&mut **tx)
        .await?;

        if result.rows_affected() > 0 {
            Ok(LinkOutcome::Linked)
        } else {
            Ok(LinkOutcome::AlreadyLinked)
        }
    }

    /// Lock both rows for the rest of `tx`, failing if either is missing.
    /// The project is checked first.
    async fn require_pair(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        project_id: DbId,
        resource_id: DbId,
    ) -> Result<(), RepoError> {
        if !ProjectRepo::lock_shared(tx, project_id).await? {
            return Err(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            }
            .into());
        }
        if !ResourceRepo::lock_shared(tx, resource_id).await? {
            return Err(CoreError::NotFound {
                entity: "Resource",
                id: resource_id,
            }
            .into());
        }
        Ok(())
    }

    async fn require_project(pool: &PgPool, project_id: DbId) -> Result<(), RepoError> {
        if ProjectRepo::exists(pool, project_id).await? {
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            }
            .into())
        }
    }
}
