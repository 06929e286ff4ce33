//! Request handlers for the `/v1/todos` resource.

use super::{
    dto::{PagedTodosResponse, TodoResponse},
    envelope::Envelope,
    error::{ApiError, Endpoint},
};
use crate::todo::{
    domain::TodoId,
    ports::TodoRepository,
    services::TodoService,
    validation::{
        CreateTodoInput, ListTodosInput, PatchTodoInput, ReplaceTodoInput, ValidationErrors,
    },
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};
use mockable::Clock;

type ApiResult<T> = Result<T, ApiError>;

/// `GET /v1/todos`
pub(crate) async fn list_todos<R, C>(
    State(service): State<TodoService<R, C>>,
    query: Result<Query<ListTodosInput>, QueryRejection>,
) -> ApiResult<Json<Envelope<PagedTodosResponse>>>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Query(input) = query.map_err(|rejection| malformed(&rejection.body_text()))?;
    let page = service
        .list(input)
        .await
        .map_err(|err| ApiError::from_service(Endpoint::List, err))?;
    Ok(Json(Envelope::success(page.into())))
}

/// `GET /v1/todos/{id}`
pub(crate) async fn get_todo<R, C>(
    State(service): State<TodoService<R, C>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Envelope<TodoResponse>>>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = todo_id(path, Endpoint::GetById)?;
    let todo = service
        .get(id)
        .await
        .map_err(|err| ApiError::from_service(Endpoint::GetById, err))?;
    Ok(Json(Envelope::success(todo.into())))
}

/// `POST /v1/todos`
pub(crate) async fn create_todo<R, C>(
    State(service): State<TodoService<R, C>>,
    body: Result<Json<CreateTodoInput>, JsonRejection>,
) -> ApiResult<impl IntoResponse>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(input) = body.map_err(|rejection| malformed(&rejection.body_text()))?;
    let todo = service
        .create(input)
        .await
        .map_err(|err| ApiError::from_service(Endpoint::Create, err))?;
    let id = todo.id();
    tracing::info!(%id, "todo created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/v1/todos/{id}"))],
        Json(Envelope::success(TodoResponse::from(todo))),
    ))
}

/// `PUT /v1/todos/{id}`
pub(crate) async fn replace_todo<R, C>(
    State(service): State<TodoService<R, C>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<ReplaceTodoInput>, JsonRejection>,
) -> ApiResult<Json<Envelope<TodoResponse>>>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = todo_id(path, Endpoint::Replace)?;
    let Json(input) = body.map_err(|rejection| malformed(&rejection.body_text()))?;
    let todo = service
        .replace(id, input)
        .await
        .map_err(|err| ApiError::from_service(Endpoint::Replace, err))?;
    tracing::info!(%id, "todo replaced");
    Ok(Json(Envelope::success(todo.into())))
}

/// `PATCH /v1/todos/{id}`
pub(crate) async fn patch_todo<R, C>(
    State(service): State<TodoService<R, C>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<PatchTodoInput>, JsonRejection>,
) -> ApiResult<Json<Envelope<TodoResponse>>>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = todo_id(path, Endpoint::Patch)?;
    let Json(input) = body.map_err(|rejection| malformed(&rejection.body_text()))?;
    let todo = service
        .patch(id, input)
        .await
        .map_err(|err| ApiError::from_service(Endpoint::Patch, err))?;
    tracing::info!(%id, "todo patched");
    Ok(Json(Envelope::success(todo.into())))
}

/// `DELETE /v1/todos/{id}`
pub(crate) async fn delete_todo<R, C>(
    State(service): State<TodoService<R, C>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = todo_id(path, Endpoint::Delete)?;
    service
        .delete(id)
        .await
        .map_err(|err| ApiError::from_service(Endpoint::Delete, err))?;
    tracing::info!(%id, "todo deleted");
    Ok(StatusCode::OK)
}

/// An identifier that is not an integer cannot name any stored item.
fn todo_id(path: Result<Path<i64>, PathRejection>, endpoint: Endpoint) -> ApiResult<TodoId> {
    path.map(|Path(raw)| TodoId::new(raw))
        .map_err(|_| ApiError::not_found(endpoint))
}

fn malformed(reason: &str) -> ApiError {
    ApiError::validation(ValidationErrors::malformed(reason).messages())
}
