//! Wire representations of to-do items and pages.

use crate::todo::domain::{Todo, TodoPage};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON view of a single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    /// Store-assigned identifier.
    pub id: i64,
    /// Item title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Completion flag.
    pub is_completed: bool,
    /// Priority between 1 and 5.
    pub priority: u8,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Optional due timestamp.
    pub due_date: Option<DateTime<Utc>>,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id().value(),
            title: todo.title().as_str().to_owned(),
            description: todo.description().map(|value| value.as_str().to_owned()),
            is_completed: todo.is_completed(),
            priority: todo.priority().value(),
            created_at: todo.created_at(),
            due_date: todo.due_date(),
        }
    }
}

/// JSON view of one page of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedTodosResponse {
    /// Items on this page, oldest first.
    pub items: Vec<TodoResponse>,
    /// Number of items matching the filters across all pages.
    pub total: u64,
    /// Zero-based page index.
    pub page: u32,
    /// Requested page size.
    pub page_size: u32,
}

impl From<TodoPage> for PagedTodosResponse {
    fn from(page: TodoPage) -> Self {
        Self {
            items: page.items.into_iter().map(TodoResponse::from).collect(),
            total: page.total,
            page: page.page,
            page_size: page.page_size,
        }
    }
}
