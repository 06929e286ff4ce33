//! Application services for to-do orchestration.

mod todo_service;

pub use todo_service::{TodoService, TodoServiceError, TodoServiceResult};
