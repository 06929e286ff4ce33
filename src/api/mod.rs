//! HTTP surface for the to-do service.
//!
//! Routes live under `/v1/todos`. Every body, success or failure, is wrapped
//! in an [`Envelope`]; failures carry `<endpoint>x<step>` codes described in
//! [`error`].

pub mod dto;
pub mod envelope;
pub mod error;
mod handlers;

pub use envelope::Envelope;
pub use error::{ApiError, Endpoint, ErrorCode};

use crate::todo::{ports::TodoRepository, services::TodoService};
use axum::{Router, routing::get};
use mockable::Clock;
use tokio::net::TcpListener;

/// Builds the application router around a to-do service.
#[must_use]
pub fn router<R, C>(service: TodoService<R, C>) -> Router
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/v1/todos",
            get(handlers::list_todos::<R, C>).post(handlers::create_todo::<R, C>),
        )
        .route(
            "/v1/todos/{id}",
            get(handlers::get_todo::<R, C>)
                .put(handlers::replace_todo::<R, C>)
                .patch(handlers::patch_todo::<R, C>)
                .delete(handlers::delete_todo::<R, C>),
        )
        .route("/health", get(|| async { "OK" }))
        .with_state(service)
}

/// Serves the router until the listener fails or the process is stopped.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
