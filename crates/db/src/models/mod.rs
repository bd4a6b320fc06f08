//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Rust field names are English; the JSON names keep the API's
//! Portuguese vocabulary (`nome`, `sigla`, `custo`, ...).

pub mod history;
pub mod project;
pub mod project_resource;
pub mod resource;
