//! `PostgreSQL` integration tests for to-do persistence and lookup.

use chrono::{Duration, TimeZone, Utc};
use diesel::connection::SimpleConnection;
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;
use todolist::todo::{
    domain::{
        CompletionFilter, Description, NewTodo, PageSize, Priority, PriorityFilter, Title,
        TodoDraft, TodoId, TodoQuery,
    },
    ports::{TodoRepository, TodoRepositoryError},
    services::{TodoService, TodoServiceError},
    validation::{CreateTodoInput, PatchTodoInput, ReplaceTodoInput},
};

use crate::postgres::helpers::{BoxError, setup_repository};

fn draft(title: &str, priority: i64) -> TodoDraft {
    TodoDraft {
        title: Title::new(title).expect("valid title"),
        description: None,
        priority: Priority::new(priority).expect("valid priority"),
        due_date: None,
    }
}

/// Clock pinned to an instant with whole-microsecond precision.
struct InstantClock(chrono::DateTime<Utc>);

impl mockable::Clock for InstantClock {
    fn local(&self) -> chrono::DateTime<chrono::Local> {
        self.0.with_timezone(&chrono::Local)
    }

    fn utc(&self) -> chrono::DateTime<Utc> {
        self.0
    }
}

fn at_minute(minute: u32) -> InstantClock {
    InstantClock(
        Utc.with_ymd_and_hms(2026, 5, 1, 12, minute, 0)
            .single()
            .expect("valid timestamp"),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires TODOLIST_TEST_DATABASE_URL"]
async fn insert_and_find_round_trip() -> Result<(), BoxError> {
    let (_schema, repository) = setup_repository()?;
    let due = Utc::now() + Duration::days(2);
    let mut source = draft("Renew passport", 4);
    source.description = Some(Description::new("Photos first").expect("valid description"));
    source.due_date = Some(due);

    let created = repository
        .insert(NewTodo::from_draft(source, &at_minute(0)))
        .await?;
    let fetched = repository
        .find_by_id(created.id())
        .await?
        .expect("inserted item should exist");

    assert!(created.id().value() > 0);
    assert_eq!(fetched, created);
    assert!(!fetched.is_completed());
    assert_eq!(fetched.created_at(), at_minute(0).0);
    assert_eq!(
        fetched.description().map(Description::as_str),
        Some("Photos first")
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires TODOLIST_TEST_DATABASE_URL"]
async fn missing_item_is_none() -> Result<(), BoxError> {
    let (_schema, repository) = setup_repository()?;

    assert_eq!(repository.find_by_id(TodoId::new(12_345)).await?, None);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires TODOLIST_TEST_DATABASE_URL"]
async fn find_matching_filters_orders_and_counts() -> Result<(), BoxError> {
    let (_schema, repository) = setup_repository()?;
    let specs = [
        ("Fourth created", 2, 40),
        ("First created", 3, 10),
        ("Third created", 3, 30),
        ("Second created", 1, 20),
    ];
    for (title, priority, minute) in specs {
        repository
            .insert(NewTodo::from_draft(draft(title, priority), &at_minute(minute)))
            .await?;
    }

    let all = repository.find_matching(&TodoQuery::default()).await?;
    let titles: Vec<&str> = all.items.iter().map(|todo| todo.title().as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "First created",
            "Second created",
            "Third created",
            "Fourth created"
        ]
    );
    assert_eq!(all.total, 4);

    let priority_three = TodoQuery::default().with_priority(PriorityFilter::Exactly(
        Priority::new(3).expect("valid priority"),
    ));
    let filtered = repository.find_matching(&priority_three).await?;
    assert_eq!(filtered.total, 2);

    let second_page = TodoQuery::default()
        .with_page_size(PageSize::new(3).expect("valid page size"))
        .with_page(1);
    let page = repository.find_matching(&second_page).await?;
    assert_eq!(page.total, 4);
    assert_eq!(
        page.items
            .iter()
            .map(|todo| todo.title().as_str())
            .collect::<Vec<_>>(),
        vec!["Fourth created"]
    );

    let completed = TodoQuery::default().with_completion(CompletionFilter::Complete);
    let none_done = repository.find_matching(&completed).await?;
    assert!(none_done.items.is_empty());
    assert_eq!(none_done.total, 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires TODOLIST_TEST_DATABASE_URL"]
async fn replace_and_delete_report_missing_rows() -> Result<(), BoxError> {
    let (_schema, repository) = setup_repository()?;
    let ghost = NewTodo::from_draft(draft("Never stored", 1), &at_minute(0))
        .into_todo(TodoId::new(777));

    assert!(matches!(
        repository.replace(&ghost).await,
        Err(TodoRepositoryError::NotFound(id)) if id == TodoId::new(777)
    ));
    assert!(matches!(
        repository.delete(TodoId::new(777)).await,
        Err(TodoRepositoryError::NotFound(_))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires TODOLIST_TEST_DATABASE_URL"]
async fn service_updates_persist() -> Result<(), BoxError> {
    let (_schema, repository) = setup_repository()?;
    let service = TodoService::new(Arc::new(repository), Arc::new(DefaultClock));

    let created = service
        .create(CreateTodoInput::new("Paint fence", 2).with_description("White"))
        .await?;
    let patched = service
        .patch(created.id(), PatchTodoInput::new().with_completed(true))
        .await?;
    assert!(patched.is_completed());
    assert_eq!(patched.description(), created.description());

    let replaced = service
        .replace(created.id(), ReplaceTodoInput::new("Paint the fence", 5))
        .await?;
    let stored = service.get(created.id()).await?;
    assert_eq!(stored, replaced);
    assert_eq!(stored.description(), None);
    assert!(!stored.is_completed());

    service.delete(created.id()).await?;
    assert!(matches!(
        service.delete(created.id()).await,
        Err(TodoServiceError::NotFound(_))
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires TODOLIST_TEST_DATABASE_URL"]
async fn missing_table_is_a_storage_error() -> Result<(), BoxError> {
    let (schema, repository) = setup_repository()?;
    schema.connect()?.batch_execute("DROP TABLE todos")?;

    let result = repository.find_matching(&TodoQuery::default()).await;

    assert!(matches!(result, Err(TodoRepositoryError::Storage(_))));
    Ok(())
}
