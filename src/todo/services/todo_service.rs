//! Service layer for to-do creation, lookup, update and removal.

use crate::todo::{
    domain::{NewTodo, Todo, TodoId, TodoPage},
    ports::{TodoRepository, TodoRepositoryError},
    validation::{
        CreateTodoInput, ListTodosInput, PatchTodoInput, ReplaceTodoInput, ValidationErrors,
        validate_create, validate_patch, validate_query, validate_replace,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for to-do operations.
///
/// Variants are listed in the order they are checked: input validation,
/// then existence of the target item, then the repository call itself.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// Input validation failed; storage was not touched.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// No item exists with the requested identifier.
    #[error("todo not found: {0}")]
    NotFound(TodoId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TodoRepositoryError),
}

impl From<TodoRepositoryError> for TodoServiceError {
    fn from(err: TodoRepositoryError) -> Self {
        match err {
            TodoRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for to-do service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// To-do orchestration service.
///
/// Updates and deletes read the item and then write it in a separate call.
/// Concurrent writers to the same item race and the last write wins.
pub struct TodoService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TodoService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TodoService<R, C>
where
    R: TodoRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new to-do service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists one page of items matching the query filters.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Validation`] for invalid paging or filter
    /// parameters and [`TodoServiceError::Repository`] when the lookup fails.
    pub async fn list(&self, input: ListTodosInput) -> TodoServiceResult<TodoPage> {
        let query = validate_query(input)?;
        Ok(self.repository.find_matching(&query).await?)
    }

    /// Retrieves an item by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when no item has the
    /// identifier and [`TodoServiceError::Repository`] when the lookup fails.
    pub async fn get(&self, id: TodoId) -> TodoServiceResult<Todo> {
        self.fetch(id).await
    }

    /// Creates a new item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Validation`] when the input is invalid and
    /// [`TodoServiceError::Repository`] when persistence fails.
    pub async fn create(&self, input: CreateTodoInput) -> TodoServiceResult<Todo> {
        let draft = validate_create(input)?;
        let new_todo = NewTodo::from_draft(draft, &*self.clock);
        Ok(self.repository.insert(new_todo).await?)
    }

    /// Overwrites every mutable field of an item.
    ///
    /// Description and due date missing from the input are cleared.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Validation`] when the input is invalid,
    /// [`TodoServiceError::NotFound`] when the item does not exist, and
    /// [`TodoServiceError::Repository`] when persistence fails.
    pub async fn replace(&self, id: TodoId, input: ReplaceTodoInput) -> TodoServiceResult<Todo> {
        let replacement = validate_replace(input)?;
        let mut todo = self.fetch(id).await?;
        todo.replace_with(replacement);
        self.repository.replace(&todo).await?;
        Ok(todo)
    }

    /// Overwrites only the fields present in the input.
    ///
    /// An input without any field returns the stored item without writing.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Validation`] when a supplied field is
    /// invalid, [`TodoServiceError::NotFound`] when the item does not exist,
    /// and [`TodoServiceError::Repository`] when persistence fails.
    pub async fn patch(&self, id: TodoId, input: PatchTodoInput) -> TodoServiceResult<Todo> {
        let patch = validate_patch(input)?;
        let mut todo = self.fetch(id).await?;
        if patch.is_empty() {
            return Ok(todo);
        }
        todo.merge(patch);
        self.repository.replace(&todo).await?;
        Ok(todo)
    }

    /// Permanently removes an item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when the item does not exist
    /// and [`TodoServiceError::Repository`] when persistence fails.
    pub async fn delete(&self, id: TodoId) -> TodoServiceResult<()> {
        self.fetch(id).await?;
        Ok(self.repository.delete(id).await?)
    }

    async fn fetch(&self, id: TodoId) -> TodoServiceResult<Todo> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TodoServiceError::NotFound(id))
    }
}
