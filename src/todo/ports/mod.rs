//! Port contracts for to-do management.
//!
//! Ports define infrastructure-agnostic interfaces used by to-do services.

pub mod repository;

pub use repository::{TodoRepository, TodoRepositoryError, TodoRepositoryResult};
