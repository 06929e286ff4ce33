//! To-do aggregate root and creation types.

use super::{Description, Priority, Title, TodoId, TodoPatch, TodoReplacement};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated caller-supplied fields for a new to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    /// Item title.
    pub title: Title,
    /// Optional description.
    pub description: Option<Description>,
    /// Item priority.
    pub priority: Priority,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}

/// A to-do item ready for insertion, waiting for a storage identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title: Title,
    description: Option<Description>,
    priority: Priority,
    created_at: DateTime<Utc>,
    due_date: Option<DateTime<Utc>>,
}

impl NewTodo {
    /// Stamps a validated draft with the current clock time.
    ///
    /// New items always start incomplete.
    #[must_use]
    pub fn from_draft(draft: TodoDraft, clock: &impl Clock) -> Self {
        Self {
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            created_at: clock.utc(),
            due_date: draft.due_date,
        }
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Completes insertion with the identifier allocated by storage.
    #[must_use]
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            description: self.description,
            is_completed: false,
            priority: self.priority,
            created_at: self.created_at,
            due_date: self.due_date,
        }
    }
}

/// To-do aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    title: Title,
    description: Option<Description>,
    is_completed: bool,
    priority: Priority,
    created_at: DateTime<Utc>,
    due_date: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted identifier.
    pub id: TodoId,
    /// Persisted title.
    pub title: Title,
    /// Persisted description, if any.
    pub description: Option<Description>,
    /// Persisted completion flag.
    pub is_completed: bool,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
}

impl Todo {
    /// Reconstructs an item from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            is_completed: data.is_completed,
            priority: data.priority,
            created_at: data.created_at,
            due_date: data.due_date,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    /// Returns whether the item is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Overwrites every mutable field with the replacement payload.
    ///
    /// Optional fields missing from the payload are cleared.
    pub fn replace_with(&mut self, replacement: TodoReplacement) {
        self.title = replacement.title;
        self.description = replacement.description;
        self.is_completed = replacement.is_completed;
        self.priority = replacement.priority;
        self.due_date = replacement.due_date;
    }

    /// Overwrites only the fields present in the patch.
    pub fn merge(&mut self, patch: TodoPatch) {
        let TodoPatch {
            title,
            description,
            is_completed,
            priority,
            due_date,
        } = patch;

        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = description {
            self.description = Some(value);
        }
        if let Some(value) = is_completed {
            self.is_completed = value;
        }
        if let Some(value) = priority {
            self.priority = value;
        }
        if let Some(value) = due_date {
            self.due_date = Some(value);
        }
    }
}
