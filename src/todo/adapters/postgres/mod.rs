//! `PostgreSQL` adapters for to-do persistence.
//!
//! Schema changes live in `migrations/` at the crate root and are applied
//! with the Diesel CLI.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTodoRepository, TodoPgPool, build_pool};
