//! Repository for the `resources` table.
//!
//! There is no unique constraint on `(name, role)`; [`ResourceRepo::register`]
//! looks the pair up first and reuses the oldest match.

use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::resource::{CreateResource, Resource, ResourceRegistration, UpdateResource};
use crate::repositories::{ProjectRepo, ProjectResourceRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, role, allocation";

/// Provides CRUD operations for resources.
pub struct ResourceRepo;

impl ResourceRepo {
    /// Register a resource, reusing an existing row with the same name and
    /// role, and optionally link it to `input.project_id`.
    ///
    /// When a link is requested for a project that does not exist, nothing
    /// is written and [`CoreError::NotFound`] is returned.
    pub async fn register(
        pool: &PgPool,
        input: &CreateResource,
    ) -> Result<ResourceRegistration, RepoError> {
        let mut tx = pool.begin().await?;

        let lookup = format!(
            "SELECT {COLUMNS} FROM resources WHERE name = $1 AND role = $2 ORDER BY id LIMIT 1"
        );
        let existing = sqlx::query_as::<_, Resource>(&lookup)
            .bind(&input.name)
            .bind(&input.role)
            .fetch_optional(&mut *tx)
            .await?;

        let reused = existing.is_some();
        let resource = match existing {
            Some(resource) => resource,
            None => {
                let insert = format!(
                    "INSERT INTO resources (name, role, allocation)
                     VALUES ($1, $2, $3)
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Resource>(&insert)
                    .bind(&input.name)
                    .bind(&input.role)
                    .bind(&input.allocation)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        let link = match input.project_id {
            Some(project_id) => {
                if !ProjectRepo::lock_shared(&mut tx, project_id).await? {
                    return Err(CoreError::NotFound {
                        entity: "Project",
                        id: project_id,
                    }
                    .into());
                }
                Some(ProjectResourceRepo::insert_link(&mut tx, project_id, resource.id).await?)
            }
            None => None,
        };

        tx.commit().await?;
        Ok(ResourceRegistration {
            resource,
            reused,
            link,
        })
    }

    /// Find a resource by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources WHERE id = $1");
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all resources ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources ORDER BY id");
        sqlx::query_as::<_, Resource>(&query).fetch_all(pool).await
    }

    /// Update a resource. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateResource,
    ) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!(
            "UPDATE resources SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                allocation = COALESCE($4, allocation)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(input.id)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.allocation)
            .fetch_optional(pool)
            .await
    }

    /// Delete a resource that has no project links.
    ///
    /// Fails with [`CoreError::NotFound`] if the resource does not exist and
    /// with [`CoreError::Conflict`] while any project still links to it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), RepoError> {
        let mut tx = pool.begin().await?;

        let locked = sqlx::query("SELECT id FROM resources WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if locked.is_none() {
            return Err(CoreError::NotFound {
                entity: "Resource",
                id,
            }
            .into());
        }

        let (links,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM project_resources WHERE resource_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;
        if links > 0 {
            return Err(CoreError::Conflict(format!(
                "Resource {id} cannot be deleted while linked to {links} project(s)"
            ))
            .into());
        }

        sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Take a shared lock on a resource row inside `tx`.
    ///
    /// Returns `false` if the resource does not exist.
    pub(crate) async fn lock_shared(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row = sqlx::query("SELECT id FROM resources WHERE id = $1 FOR SHARE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;
        Ok(row.is_some())
    }
}
