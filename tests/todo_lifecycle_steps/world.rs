//! Shared world state for to-do lifecycle BDD scenarios.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use eyre::WrapErr;
use http_body_util::BodyExt;
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::Value;
use todolist::{
    api,
    todo::{adapters::memory::InMemoryTodoRepository, services::TodoService},
};
use tower::ServiceExt;

/// Last response observed by a scenario.
pub struct RecordedResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Value,
}

/// Scenario world for to-do lifecycle behaviour tests.
pub struct TodoApiWorld {
    pub app: Router,
    pub created_id: Option<i64>,
    pub last_response: Option<RecordedResponse>,
}

impl TodoApiWorld {
    /// Creates a world backed by an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let service = TodoService::new(
            Arc::new(InMemoryTodoRepository::new()),
            Arc::new(DefaultClock),
        );
        Self {
            app: api::router(service),
            created_id: None,
            last_response: None,
        }
    }

    /// Sends a request through the router and records the response.
    pub fn send(
        &mut self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> Result<&RecordedResponse, eyre::Report> {
        let mut builder = Request::builder().method(method).uri(uri);
        let payload = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let request = builder.body(payload).wrap_err("build request")?;
        let recorded = run_async(record(self.app.clone(), request))?;
        Ok(self.last_response.insert(recorded))
    }

    /// Returns the identifier of the item created earlier in the scenario.
    pub fn created_id(&self) -> Result<i64, eyre::Report> {
        self.created_id
            .ok_or_else(|| eyre::eyre!("missing created todo in scenario world"))
    }

    /// Returns the last recorded response.
    pub fn response(&self) -> Result<&RecordedResponse, eyre::Report> {
        self.last_response
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no request has been sent in this scenario"))
    }
}

impl Default for TodoApiWorld {
    fn default() -> Self {
        Self::new()
    }
}

async fn record(app: Router, request: Request<Body>) -> Result<RecordedResponse, eyre::Report> {
    let response = app.oneshot(request).await.wrap_err("route request")?;
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);
    let bytes = response
        .into_body()
        .collect()
        .await
        .wrap_err("read response body")?
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).wrap_err("decode response body")?
    };
    Ok(RecordedResponse {
        status,
        location,
        body,
    })
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoApiWorld {
    TodoApiWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
