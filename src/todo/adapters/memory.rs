//! In-memory repository for tests and database-less runs.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{NewTodo, Todo, TodoId, TodoPage, TodoQuery},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory to-do repository.
///
/// Identifiers start at 1 and increase monotonically; a deleted identifier
/// is never handed out again.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    todos: BTreeMap<TodoId, Todo>,
    last_id: i64,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn internal_error(message: String) -> TodoRepositoryError {
    TodoRepositoryError::internal(std::io::Error::other(message))
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_matching(&self, query: &TodoQuery) -> TodoRepositoryResult<TodoPage> {
        let state = self
            .state
            .read()
            .map_err(|err| internal_error(format!("lock poisoned: {err}")))?;
        Ok(query.paginate(state.todos.values().cloned()))
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let state = self
            .state
            .read()
            .map_err(|err| internal_error(format!("lock poisoned: {err}")))?;
        Ok(state.todos.get(&id).cloned())
    }

    async fn insert(&self, todo: NewTodo) -> TodoRepositoryResult<Todo> {
        let mut state = self
            .state
            .write()
            .map_err(|err| internal_error(format!("lock poisoned: {err}")))?;
        let next_id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| internal_error("todo identifier space exhausted".to_owned()))?;
        state.last_id = next_id;

        let stored = todo.into_todo(TodoId::new(next_id));
        state.todos.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn replace(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| internal_error(format!("lock poisoned: {err}")))?;
        let id = todo.id();
        let slot = state
            .todos
            .get_mut(&id)
            .ok_or(TodoRepositoryError::NotFound(id))?;
        *slot = todo.clone();
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| internal_error(format!("lock poisoned: {err}")))?;
        state
            .todos
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoRepositoryError::NotFound(id))
    }
}
