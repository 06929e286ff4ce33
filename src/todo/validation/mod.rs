//! Request validation for to-do operations.
//!
//! Each operation has its own raw input shape in [`input`] and a matching
//! validation function in [`rules`]. Validation collects every violation in
//! field order instead of stopping at the first one, and never looks at
//! stored state.

pub mod error;
pub mod input;
pub mod rules;

pub use error::{ValidationErrors, ValidationResult, Violation};
pub use input::{CreateTodoInput, ListTodosInput, PatchTodoInput, ReplaceTodoInput};
pub use rules::{validate_create, validate_patch, validate_query, validate_replace};
