//! `PostgreSQL` repository implementation for to-do storage.

use super::{
    models::{NewTodoRow, TodoChangeset, TodoRow},
    schema::todos,
};
use crate::todo::{
    domain::{
        Description, NewTodo, PersistedTodoData, Priority, PriorityFilter,
        Title, Todo, TodoId, TodoPage, TodoQuery,
    },
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use diesel::result::Error as DieselError;
use std::time::Duration;

/// `PostgreSQL` connection pool type used by to-do adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// Builds a connection pool for the given database URL.
///
/// # Errors
///
/// Returns [`PoolError`] when the pool cannot open its initial connections
/// within `connection_timeout`.
pub fn build_pool(
    database_url: &str,
    max_size: u32,
    connection_timeout: Duration,
) -> Result<TodoPgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .connection_timeout(connection_timeout)
        .build(manager)
}

/// `PostgreSQL`-backed to-do repository.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: TodoPgPool,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::storage)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::internal)?
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn find_matching(&self, query: &TodoQuery) -> TodoRepositoryResult<TodoPage> {
        let criteria = *query;
        self.run_blocking(move |connection| {
            let total = filtered(&criteria)
                .count()
                .get_result::<i64>(connection)
                .map_err(classify)?;
            let rows = page_of(&criteria)?
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(classify)?;

            let items = rows
                .into_iter()
                .map(row_to_todo)
                .collect::<TodoRepositoryResult<Vec<_>>>()?;
            Ok(TodoPage {
                items,
                total: u64::try_from(total).map_err(TodoRepositoryError::internal)?,
                page: criteria.page(),
                page_size: criteria.page_size().value(),
            })
        })
        .await
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .find(id.value())
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(classify)?;
            row.map(row_to_todo).transpose()
        })
        .await
    }

    async fn insert(&self, todo: NewTodo) -> TodoRepositoryResult<Todo> {
        let new_row = to_new_row(&todo);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(todos::table)
                .values(&new_row)
                .returning(TodoRow::as_returning())
                .get_result::<TodoRow>(connection)
                .map_err(classify)?;
            row_to_todo(row)
        })
        .await
    }

    async fn replace(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        let id = todo.id();
        let changeset = to_changeset(todo);
        self.run_blocking(move |connection| {
            let updated = diesel::update(todos::table.find(id.value()))
                .set(&changeset)
                .execute(connection)
                .map_err(classify)?;
            if updated == 0 {
                return Err(TodoRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(todos::table.find(id.value()))
                .execute(connection)
                .map_err(classify)?;
            if deleted == 0 {
                return Err(TodoRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

/// Builds the filtered base statement shared by the count and page queries.
fn filtered(query: &TodoQuery) -> todos::BoxedQuery<'static, Pg> {
    let mut statement = todos::table.into_boxed();
    if let Some(is_completed) = query.completion().selected() {
        statement = statement.filter(todos::is_completed.eq(is_completed));
    }
    if let PriorityFilter::Exactly(priority) = query.priority() {
        statement = statement.filter(todos::priority.eq(i16::from(priority.value())));
    }
    statement
}

/// Orders by creation time with the identifier as tie-break, then slices.
fn page_of(query: &TodoQuery) -> TodoRepositoryResult<todos::BoxedQuery<'static, Pg>> {
    let offset = i64::try_from(query.offset()).map_err(TodoRepositoryError::internal)?;
    Ok(filtered(query)
        .order_by((todos::created_at.asc(), todos::id.asc()))
        .offset(offset)
        .limit(i64::from(query.limit())))
}

/// Codec failures are adapter bugs; everything else is the store talking back.
fn classify(err: DieselError) -> TodoRepositoryError {
    match err {
        DieselError::DeserializationError(_) | DieselError::SerializationError(_) => {
            TodoRepositoryError::internal(err)
        }
        _ => TodoRepositoryError::storage(err),
    }
}

fn to_new_row(todo: &NewTodo) -> NewTodoRow {
    NewTodoRow {
        title: todo.title().as_str().to_owned(),
        description: todo.description().map(|value| value.as_str().to_owned()),
        is_completed: false,
        priority: i16::from(todo.priority().value()),
        created_at: todo.created_at(),
        due_date: todo.due_date(),
    }
}

fn to_changeset(todo: &Todo) -> TodoChangeset {
    TodoChangeset {
        title: todo.title().as_str().to_owned(),
        description: todo.description().map(|value| value.as_str().to_owned()),
        is_completed: todo.is_completed(),
        priority: i16::from(todo.priority().value()),
        due_date: todo.due_date(),
    }
}

fn row_to_todo(row: TodoRow) -> TodoRepositoryResult<Todo> {
    let TodoRow {
        id,
        title: persisted_title,
        description: persisted_description,
        is_completed,
        priority: persisted_priority,
        created_at,
        due_date,
    } = row;

    let title = Title::new(persisted_title).map_err(TodoRepositoryError::internal)?;
    let description = persisted_description
        .map(Description::new)
        .transpose()
        .map_err(TodoRepositoryError::internal)?;
    let priority =
        Priority::new(i64::from(persisted_priority)).map_err(TodoRepositoryError::internal)?;

    Ok(Todo::from_persisted(PersistedTodoData {
        id: TodoId::new(id),
        title,
        description,
        is_completed,
        priority,
        created_at,
        due_date,
    }))
}
