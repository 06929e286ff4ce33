//! Validation rules for each to-do input shape.
//!
//! Rules run in field order and report every violation they find. A rule
//! set either yields the validated domain value or a non-empty
//! [`ValidationErrors`].

use super::{
    error::{ValidationResult, ViolationCollector},
    input::{CreateTodoInput, ListTodosInput, PatchTodoInput, ReplaceTodoInput},
};
use crate::todo::domain::{
    CompletionFilter, Description, PageSize, Priority, PriorityFilter, Title, TodoDomainError,
    TodoDraft, TodoPatch, TodoQuery, TodoReplacement,
};

/// Validates input for creating a to-do item.
///
/// # Errors
///
/// Returns [`super::ValidationErrors`] when the title or priority is
/// missing or out of bounds, or the description is too long.
///
/// # Examples
///
/// ```
/// use todolist::todo::validation::{CreateTodoInput, validate_create};
///
/// let draft = validate_create(CreateTodoInput::new("Buy milk", 2)).expect("valid input");
/// assert_eq!(draft.title.as_str(), "Buy milk");
///
/// let errors = validate_create(CreateTodoInput::new("No", 9)).expect_err("invalid input");
/// assert_eq!(
///     errors.messages(),
///     vec![
///         "title must have at least 3 characters".to_owned(),
///         "priority must be between 1 and 5".to_owned(),
///     ]
/// );
/// ```
pub fn validate_create(input: CreateTodoInput) -> ValidationResult<TodoDraft> {
    let mut collector = ViolationCollector::default();
    let title = collector.check(required_title(input.title));
    let description = collector.check(optional_description(input.description));
    let priority = collector.check(required_priority(input.priority));

    let (Some(title), Some(description), Some(priority)) = (title, description, priority) else {
        return Err(collector.into_errors());
    };
    Ok(TodoDraft {
        title,
        description,
        priority,
        due_date: input.due_date,
    })
}

/// Validates input for replacing a to-do item.
///
/// Title and priority are required exactly as on creation.
///
/// # Errors
///
/// Returns [`super::ValidationErrors`] under the same conditions as
/// [`validate_create`].
pub fn validate_replace(input: ReplaceTodoInput) -> ValidationResult<TodoReplacement> {
    let mut collector = ViolationCollector::default();
    let title = collector.check(required_title(input.title));
    let description = collector.check(optional_description(input.description));
    let priority = collector.check(required_priority(input.priority));

    let (Some(title), Some(description), Some(priority)) = (title, description, priority) else {
        return Err(collector.into_errors());
    };
    Ok(TodoReplacement {
        title,
        description,
        is_completed: input.is_completed,
        priority,
        due_date: input.due_date,
    })
}

/// Validates input for merging fields into a to-do item.
///
/// Absent fields are accepted; present fields must satisfy their creation
/// constraints.
///
/// # Errors
///
/// Returns [`super::ValidationErrors`] when a supplied title, description or
/// priority is out of bounds.
pub fn validate_patch(input: PatchTodoInput) -> ValidationResult<TodoPatch> {
    let mut collector = ViolationCollector::default();
    let title = collector.check(input.title.map(Title::new).transpose());
    let description = collector.check(optional_description(input.description));
    let priority = collector.check(input.priority.map(Priority::new).transpose());

    let (Some(title), Some(description), Some(priority)) = (title, description, priority) else {
        return Err(collector.into_errors());
    };
    Ok(TodoPatch {
        title,
        description,
        is_completed: input.is_completed,
        priority,
        due_date: input.due_date,
    })
}

/// Validates list query parameters, applying defaults for absent ones.
///
/// # Errors
///
/// Returns [`super::ValidationErrors`] when the page is negative, the page
/// size is outside `1..=100`, or a filter code is unknown.
pub fn validate_query(input: ListTodosInput) -> ValidationResult<TodoQuery> {
    let mut collector = ViolationCollector::default();
    let page = collector.check(input.page.map_or(Ok(0), TodoQuery::page_index));
    let page_size = collector.check(input.page_size.map_or(Ok(PageSize::DEFAULT), PageSize::new));
    let completion = collector.check(
        input
            .is_completed
            .map_or(Ok(CompletionFilter::Any), CompletionFilter::try_from),
    );
    let priority = collector.check(
        input
            .priority
            .map_or(Ok(PriorityFilter::Any), PriorityFilter::try_from),
    );

    let (Some(page), Some(page_size), Some(completion), Some(priority)) =
        (page, page_size, completion, priority)
    else {
        return Err(collector.into_errors());
    };
    Ok(TodoQuery::new(page, page_size, completion, priority))
}

fn required_title(title: Option<String>) -> Result<Title, TodoDomainError> {
    title
        .ok_or(TodoDomainError::MissingTitle)
        .and_then(Title::new)
}

fn required_priority(priority: Option<i64>) -> Result<Priority, TodoDomainError> {
    priority
        .ok_or(TodoDomainError::MissingPriority)
        .and_then(Priority::new)
}

fn optional_description(
    description: Option<String>,
) -> Result<Option<Description>, TodoDomainError> {
    description.map(Description::new).transpose()
}
