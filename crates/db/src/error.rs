//! Repository error type.

use portfolio_core::error::CoreError;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Failure of a repository operation.
///
/// Domain outcomes (missing rows, rule violations, blocked deletes) are
/// reported as [`CoreError`]; anything the driver raises is kept as-is.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RepoError {
    /// Convert an insert failure, turning unique constraint violations into
    /// [`CoreError::DuplicateKey`].
    pub(crate) fn from_insert(err: sqlx::Error, duplicate_message: &str) -> Self {
        Self::from_unique(err, |detail| {
            CoreError::DuplicateKey(format!("{duplicate_message} ({detail})"))
        })
    }

    /// Convert an update failure, turning unique constraint violations into
    /// [`CoreError::Conflict`].
    pub(crate) fn from_update(err: sqlx::Error, duplicate_message: &str) -> Self {
        Self::from_unique(err, |detail| {
            CoreError::Conflict(format!("{duplicate_message} ({detail})"))
        })
    }

    fn from_unique(err: sqlx::Error, domain: impl FnOnce(String) -> CoreError) -> Self {
        match unique_constraint(&err) {
            Some(constraint) => {
                tracing::warn!(%constraint, "Unique constraint rejected write");
                RepoError::Core(domain(constraint))
            }
            None => RepoError::Database(err),
        }
    }
}

/// Name of the violated unique constraint, if `err` is a unique violation.
fn unique_constraint(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            Some(db_err.constraint().unwrap_or("unknown").to_string())
        }
        _ => None,
    }
}
