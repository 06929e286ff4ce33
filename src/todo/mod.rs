//! To-do resource management.
//!
//! This module owns the resource access logic for to-do items: request
//! validation, the paged filter query contract, full-replace and
//! partial-merge update semantics, and the repository boundary those
//! operations run against. It follows hexagonal architecture:
//!
//! - Domain types and the query engine in [`domain`]
//! - Input shapes and validation rules in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
