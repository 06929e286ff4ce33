//! Update payloads for existing to-do items.
//!
//! A [`TodoReplacement`] describes the complete new state of every mutable
//! field. A [`TodoPatch`] carries only the fields the caller supplied; `None`
//! means "leave unchanged", never "reset to default".

use super::{Description, Priority, Title};
use chrono::{DateTime, Utc};

/// Validated full-replace payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoReplacement {
    /// New title.
    pub title: Title,
    /// New description; `None` clears the stored value.
    pub description: Option<Description>,
    /// New completion flag.
    pub is_completed: bool,
    /// New priority.
    pub priority: Priority,
    /// New due date; `None` clears the stored value.
    pub due_date: Option<DateTime<Utc>>,
}

/// Validated partial-merge payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    /// Title to set, if supplied.
    pub title: Option<Title>,
    /// Description to set, if supplied.
    pub description: Option<Description>,
    /// Completion flag to set, if supplied.
    pub is_completed: Option<bool>,
    /// Priority to set, if supplied.
    pub priority: Option<Priority>,
    /// Due date to set, if supplied.
    pub due_date: Option<DateTime<Utc>>,
}

impl TodoPatch {
    /// Returns `true` when the patch carries no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.is_completed.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
    }
}
