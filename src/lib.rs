//! Todolist: a small REST service for managing to-do items.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: validated item fields, list queries and pagination
//! - **Ports**: the repository trait the service depends on
//! - **Adapters**: in-memory and `PostgreSQL` repositories
//! - **API**: the axum router that exposes the service over HTTP
//!
//! # Modules
//!
//! - [`todo`]: to-do domain, validation, storage and orchestration
//! - [`api`]: HTTP routes, response envelope and error codes
//! - [`config`]: layered settings from defaults and environment
//! - [`telemetry`]: structured log subscriber setup

pub mod api;
pub mod config;
pub mod telemetry;
pub mod todo;
