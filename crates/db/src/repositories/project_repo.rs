//! Repository for the `projects` table.
//!
//! Deleting a project also removes its `histories` rows and its
//! `project_resources` rows in the same transaction. Linked resources are
//! left in place.

use std::collections::HashMap;

use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::history::History;
use crate::models::project::{
    CreateProject, Project, ProjectDeletion, ProjectWithHistory, UpdateProject,
};
use crate::repositories::HistoryRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, acronym, description, project_type, cost, status, registered_at";

/// Message for unique violations on `name` or `acronym`.
const DUPLICATE_PROJECT: &str = "A project with the same name or acronym already exists";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Validate and insert a new project, returning the created row.
    ///
    /// A clash on name or acronym, including one lost to a concurrent
    /// insert, fails with [`CoreError::DuplicateKey`].
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, RepoError> {
        input.validate()?;

        let query = format!(
            "INSERT INTO projects (name, acronym, description, project_type, cost, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.acronym)
            .bind(&input.description)
            .bind(&input.project_type)
            .bind(input.cost)
            .bind(&input.status)
            .fetch_one(pool)
            .await
            .map_err(|e| RepoError::from_insert(e, DUPLICATE_PROJECT))
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by ID, enriched with its history entries.
    pub async fn find_by_id_with_history(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectWithHistory>, sqlx::Error> {
        let project = Self::find_by_id(pool, id).await?;
        match project {
            Some(project) => {
                let history = HistoryRepo::list_for_project(pool, project.id).await?;
                Ok(Some(ProjectWithHistory { project, history }))
            }
            None => Ok(None),
        }
    }

    /// Whether a project with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM projects WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// List all projects ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List all projects with their history entries.
    ///
    /// Loads every history row in one query and groups it by project.
    pub async fn list_with_history(pool: &PgPool) -> Result<Vec<ProjectWithHistory>, sqlx::Error> {
        let projects = Self::list(pool).await?;
        let mut by_project: HashMap<DbId, Vec<History>> = HashMap::new();
        for entry in HistoryRepo::list_all(pool).await? {
            by_project.entry(entry.project_id).or_default().push(entry);
        }

        Ok(projects
            .into_iter()
            .map(|project| {
                let history = by_project.remove(&project.id).unwrap_or_default();
                ProjectWithHistory { project, history }
            })
            .collect())
    }

    /// Apply a partial edit to a project.
    ///
    /// The row is locked, the present fields are merged into it and the
    /// project rules are re-run on the merged values. Nothing is written
    /// unless every rule passes. A name or acronym already used by another
    /// project fails with [`CoreError::Conflict`].
    pub async fn update(pool: &PgPool, input: &UpdateProject) -> Result<Project, RepoError> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 FOR UPDATE");
        let mut project = sqlx::query_as::<_, Project>(&select)
            .bind(input.id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Project",
                id: input.id,
            })?;

        project.apply(input);
        project.validate()?;

        let update = format!(
            "UPDATE projects SET
                name = $2,
                acronym = $3,
                description = $4,
                project_type = $5,
                cost = $6,
                status = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Project>(&update)
            .bind(project.id)
            .bind(&project.name)
            .bind(&project.acronym)
            .bind(&project.description)
            .bind(&project.project_type)
            .bind(project.cost)
            .bind(&project.status)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| RepoError::from_update(e, DUPLICATE_PROJECT))?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Delete a project together with its history and resource links.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<ProjectDeletion, RepoError> {
        let mut tx = pool.begin().await?;

        let locked = sqlx::query("SELECT id FROM projects WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if locked.is_none() {
            return Err(CoreError::NotFound {
                entity: "Project",
                id,
            }
            .into());
        }

        let links = sqlx::query("DELETE FROM project_resources WHERE project_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let history = sqlx::query("DELETE FROM histories WHERE project_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(ProjectDeletion {
            project_id: id,
            history_removed: history.rows_affected(),
            links_removed: links.rows_affected(),
        })
    }

    /// Take a shared lock on a project row inside `tx`.
    ///
    /// Returns `false` if the project does not exist. The lock keeps the
    /// project from being deleted until `tx` ends.
    pub(crate) async fn lock_shared(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row = sqlx::query("SELECT id FROM projects WHERE id = $1 FOR SHARE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;
        Ok(row.is_some())
    }
}
