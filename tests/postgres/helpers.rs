//! Shared test helpers for `PostgreSQL` integration tests.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use todolist::todo::adapters::postgres::{PostgresTodoRepository, TodoPgPool};

/// Boxed error type used by fallible helpers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Environment variable naming the test server.
pub const DATABASE_URL_VAR: &str = "TODOLIST_TEST_DATABASE_URL";

/// SQL creating the `todos` table.
pub const CREATE_TODOS_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_todos/up.sql");

static SCHEMA_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Pins every pooled connection to one schema.
#[derive(Debug)]
struct SearchPath(String);

impl CustomizeConnection<PgConnection, diesel::r2d2::Error> for SearchPath {
    fn on_acquire(&self, connection: &mut PgConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(&format!("SET search_path TO {}", self.0))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// A migrated schema that is dropped when the value goes out of scope.
pub struct TestSchema {
    url: String,
    name: String,
}

impl TestSchema {
    /// Opens a direct connection pinned to the schema.
    pub fn connect(&self) -> Result<PgConnection, BoxError> {
        let mut connection = PgConnection::establish(&self.url)?;
        connection.batch_execute(&format!("SET search_path TO {}", self.name))?;
        Ok(connection)
    }
}

impl Drop for TestSchema {
    fn drop(&mut self) {
        if let Ok(mut connection) = PgConnection::establish(&self.url) {
            let statement = format!("DROP SCHEMA IF EXISTS {} CASCADE", self.name);
            if let Err(err) = connection.batch_execute(&statement) {
                tracing::warn!(schema = %self.name, %err, "failed to drop test schema");
            }
        }
    }
}

/// Returns the test server URL.
///
/// # Errors
///
/// Returns an error naming [`DATABASE_URL_VAR`] when it is unset or blank.
pub fn database_url() -> Result<String, BoxError> {
    std::env::var(DATABASE_URL_VAR)
        .ok()
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| format!("{DATABASE_URL_VAR} must name a PostgreSQL server").into())
}

/// Creates a private schema with the `todos` table and a repository bound to it.
///
/// # Errors
///
/// Returns an error if no test server is configured, the schema cannot be
/// created, or the pool cannot connect.
pub fn setup_repository() -> Result<(TestSchema, PostgresTodoRepository), BoxError> {
    let url = database_url()?;
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos();
    let sequence = SCHEMA_COUNTER.fetch_add(1, Ordering::SeqCst);
    let schema = TestSchema {
        name: format!("todo_test_{}_{nanos}_{sequence}", std::process::id()),
        url,
    };

    let mut connection = PgConnection::establish(&schema.url)?;
    connection.batch_execute(&format!(
        "CREATE SCHEMA {0}; SET search_path TO {0};",
        schema.name
    ))?;
    connection.batch_execute(CREATE_TODOS_SQL)?;

    let pool: TodoPgPool = Pool::builder()
        .max_size(2)
        .connection_customizer(Box::new(SearchPath(schema.name.clone())))
        .build(ConnectionManager::<PgConnection>::new(schema.url.clone()))?;
    Ok((schema, PostgresTodoRepository::new(pool)))
}
