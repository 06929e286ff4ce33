//! Runs the to-do HTTP service.
//!
//! Usage:
//!
//! ```text
//! TODOLIST__DATABASE__URL=postgres://todo@localhost/todos todo_server
//! ```
//!
//! Without `TODOLIST__DATABASE__URL` items live in process memory and are
//! lost on exit. See [`todolist::config`] for every variable.

use axum::Router;
use eyre::WrapErr;
use mockable::DefaultClock;
use secrecy::ExposeSecret;
use std::sync::Arc;
use todolist::{
    api,
    config::Settings,
    telemetry,
    todo::{
        adapters::{
            memory::InMemoryTodoRepository,
            postgres::{PostgresTodoRepository, build_pool},
        },
        services::TodoService,
    },
};
use tokio::net::TcpListener;

fn build_app(settings: &Settings) -> eyre::Result<Router> {
    let clock = Arc::new(DefaultClock);
    let Some(url) = settings.database.url.as_ref() else {
        tracing::warn!("no database URL configured; items are kept in memory");
        let repository = Arc::new(InMemoryTodoRepository::new());
        return Ok(api::router(TodoService::new(repository, clock)));
    };

    let pool = build_pool(
        url.expose_secret(),
        settings.database.pool_size,
        settings.database.connection_timeout(),
    )
    .wrap_err("failed to connect to PostgreSQL")?;
    tracing::info!(pool_size = settings.database.pool_size, "using PostgreSQL storage");
    let repository = Arc::new(PostgresTodoRepository::new(pool));
    Ok(api::router(TodoService::new(repository, clock)))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let settings = Settings::load().wrap_err("failed to load configuration")?;
    telemetry::init(&settings.logging).wrap_err("failed to initialise logging")?;

    let app = build_app(&settings)?;

    let address = settings.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .wrap_err_with(|| format!("failed to bind {address}"))?;
    tracing::info!(%address, "listening");

    api::serve(listener, app).await.wrap_err("server stopped")
}
