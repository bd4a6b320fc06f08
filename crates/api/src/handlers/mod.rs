pub mod conversion;
pub mod history;
pub mod project;
pub mod project_resource;
pub mod resource;
