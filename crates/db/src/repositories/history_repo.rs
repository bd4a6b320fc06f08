//! Repository for the `histories` table.

use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::history::{CreateHistory, History};
use crate::repositories::ProjectRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, description, inserted_at, project_id";

/// Provides create and list operations for project history entries.
pub struct HistoryRepo;

impl HistoryRepo {
    /// Append a history entry to an existing project.
    ///
    /// Uses the caller's `inserted_at` when given, the server clock otherwise.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateHistory,
    ) -> Result<History, RepoError> {
        input.validate()?;

        let mut tx = pool.begin().await?;

        if !ProjectRepo::lock_shared(&mut tx, project_id).await? {
            return Err(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            }
            .into());
        }

        let query = format!(
            "INSERT INTO histories (description, inserted_at, project_id)
             VALUES ($1, COALESCE($2, NOW()), $3)
             RETURNING {COLUMNS}"
        );
        let history = sqlx::query_as::<_, History>(&query)
            .bind(&input.description)
            .bind(input.inserted_at)
            .bind(project_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(history)
    }

    /// List the history of a project, oldest first.
    ///
    /// Fails with [`CoreError::NotFound`] if the project does not exist.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<History>, RepoError> {
        if !ProjectRepo::exists(pool, project_id).await? {
            return Err(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            }
            .into());
        }
        Ok(Self::list_for_project(pool, project_id).await?)
    }

    /// History rows of one project without checking that the project exists.
    pub(crate) async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<History>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM histories WHERE project_id = $1 ORDER BY inserted_at, id"
        );
        sqlx::query_as::<_, History>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Every history row, grouped by project and oldest first within each.
    pub(crate) async fn list_all(pool: &PgPool) -> Result<Vec<History>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM histories ORDER BY project_id, inserted_at, id");
        sqlx::query_as::<_, History>(&query).fetch_all(pool).await
    }

    /// Number of history rows owned by a project.
    pub async fn count_for_project(pool: &PgPool, project_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM histories WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
