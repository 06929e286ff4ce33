//! Diesel row models for to-do persistence.

use super::schema::todos;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for to-do records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoRow {
    /// Storage-allocated identifier.
    pub id: i64,
    /// Item title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Completion flag.
    pub is_completed: bool,
    /// Priority between 1 and 5.
    pub priority: i16,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}

/// Insert model for to-do records; the identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// Item title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Completion flag.
    pub is_completed: bool,
    /// Priority between 1 and 5.
    pub priority: i16,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}

/// Changeset covering every mutable column.
///
/// `None` writes `NULL`, so a replacement without a description or due date
/// clears the stored value.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todos)]
#[diesel(treat_none_as_null = true)]
pub struct TodoChangeset {
    /// Item title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Completion flag.
    pub is_completed: bool,
    /// Priority between 1 and 5.
    pub priority: i16,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}
