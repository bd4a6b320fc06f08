//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-statement writes open
//! their own transaction and either commit everything or nothing.

pub mod history_repo;
pub mod project_repo;
pub mod project_resource_repo;
pub mod resource_repo;

pub use history_repo::HistoryRepo;
pub use project_repo::ProjectRepo;
pub use project_resource_repo::ProjectResourceRepo;
pub use resource_repo::ResourceRepo;
