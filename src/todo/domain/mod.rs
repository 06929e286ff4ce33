//! Domain model for to-do items.
//!
//! Field contracts are enforced by validated newtypes so a constructed
//! [`Todo`] always satisfies its invariants. The query engine and the update
//! payloads live here too because they are pure functions of domain values.

mod error;
mod fields;
mod ids;
mod query;
mod todo;
mod update;

pub use error::{TodoDomainError, TodoQueryError};
pub use fields::{Description, Priority, Title};
pub use ids::TodoId;
pub use query::{CompletionFilter, PageSize, PriorityFilter, TodoPage, TodoQuery};
pub use todo::{NewTodo, PersistedTodoData, Todo, TodoDraft};
pub use update::{TodoPatch, TodoReplacement};
