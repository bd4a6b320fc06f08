//! Domain types and validation rules for the project portfolio.
//!
//! This crate has no database or HTTP dependencies; both the repository
//! layer and the API layer build on it.

pub mod currency;
pub mod error;
pub mod history;
pub mod project;
pub mod types;
