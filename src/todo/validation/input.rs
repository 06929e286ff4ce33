//! Raw input shapes as they arrive from callers.
//!
//! Every field is optional at this level so that a missing required field is
//! reported as a violation rather than a decoding failure. Field names use
//! camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Input for creating a to-do item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoInput {
    /// Required title.
    pub title: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Required priority.
    pub priority: Option<i64>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}

impl CreateTodoInput {
    /// Creates an input with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, priority: i64) -> Self {
        Self {
            title: Some(title.into()),
            priority: Some(priority),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Input for replacing every mutable field of a to-do item.
///
/// `description` and `dueDate` left out of the payload clear the stored
/// values; `isCompleted` left out resets the item to incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceTodoInput {
    /// Required title.
    pub title: Option<String>,
    /// Description; absent clears the stored value.
    pub description: Option<String>,
    /// Completion flag; absent means `false`.
    #[serde(default)]
    pub is_completed: bool,
    /// Required priority.
    pub priority: Option<i64>,
    /// Due date; absent clears the stored value.
    pub due_date: Option<DateTime<Utc>>,
}

impl ReplaceTodoInput {
    /// Creates an input with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, priority: i64) -> Self {
        Self {
            title: Some(title.into()),
            priority: Some(priority),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Input for merging supplied fields into a to-do item.
///
/// A field that is absent or `null` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchTodoInput {
    /// Title to set.
    pub title: Option<String>,
    /// Description to set.
    pub description: Option<String>,
    /// Completion flag to set.
    pub is_completed: Option<bool>,
    /// Priority to set.
    pub priority: Option<i64>,
    /// Due date to set.
    pub due_date: Option<DateTime<Utc>>,
}

impl PatchTodoInput {
    /// Creates an input that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, is_completed: bool) -> Self {
        self.is_completed = Some(is_completed);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Query-string parameters for listing to-do items.
///
/// Absent parameters take their defaults: page `0`, page size `10`,
/// completion filter `2` (any) and priority filter `0` (any).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTodosInput {
    /// Zero-based page index.
    pub page: Option<i64>,
    /// Items per page.
    pub page_size: Option<i64>,
    /// Completion filter code: `0` incomplete, `1` complete, `2` any.
    pub is_completed: Option<i64>,
    /// Priority filter code: `0` any, `1..=5` exact match.
    pub priority: Option<i64>,
}

impl ListTodosInput {
    /// Creates an input that uses every default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page index.
    #[must_use]
    pub const fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets the completion filter code.
    #[must_use]
    pub const fn with_completion(mut self, code: i64) -> Self {
        self.is_completed = Some(code);
        self
    }

    /// Sets the priority filter code.
    #[must_use]
    pub const fn with_priority(mut self, code: i64) -> Self {
        self.priority = Some(code);
        self
    }
}
