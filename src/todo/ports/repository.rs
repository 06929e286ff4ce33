//! Repository port for to-do persistence and lookup.

use crate::todo::domain::{NewTodo, Todo, TodoId, TodoPage, TodoQuery};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for to-do repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// To-do persistence contract.
///
/// Every call is atomic for the single item it touches. No call spans more
/// than one item, and none of them holds state between calls.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Runs a filtered, paged listing.
    ///
    /// The returned total counts every match, not only the items on the
    /// requested page.
    async fn find_matching(&self, query: &TodoQuery) -> TodoRepositoryResult<TodoPage>;

    /// Finds an item by identifier.
    ///
    /// Returns `None` when the item does not exist.
    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Stores a new item and returns it with its allocated identifier.
    async fn insert(&self, todo: NewTodo) -> TodoRepositoryResult<Todo>;

    /// Persists every mutable field of an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the item does not exist.
    async fn replace(&self, todo: &Todo) -> TodoRepositoryResult<()>;

    /// Removes an item permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the item does not exist.
    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()>;
}

/// Errors returned by to-do repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The item was not found.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// Communication with the store failed (pool, connectivity, timeout or a
    /// constraint rejected at the storage boundary).
    #[error("storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),

    /// Any other failure inside the adapter.
    #[error("internal repository error: {0}")]
    Internal(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a storage communication error.
    #[must_use]
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }

    /// Wraps an unexpected adapter error.
    #[must_use]
    pub fn internal(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Internal(Arc::new(err))
    }
}
