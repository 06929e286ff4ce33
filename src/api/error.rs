//! Error classification and HTTP mapping.
//!
//! Every endpoint and failure kind pair owns a stable `<endpoint>x<step>`
//! code. The code is the only correlation handle a client sees; the
//! underlying cause goes to the log.

use super::envelope::Envelope;
use crate::todo::{ports::TodoRepositoryError, services::TodoServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

/// HTTP endpoints of the to-do API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /v1/todos`
    List,
    /// `GET /v1/todos/{id}`
    GetById,
    /// `POST /v1/todos`
    Create,
    /// `PUT /v1/todos/{id}`
    Replace,
    /// `PATCH /v1/todos/{id}`
    Patch,
    /// `DELETE /v1/todos/{id}`
    Delete,
}

impl Endpoint {
    /// Code reported when the target item does not exist.
    ///
    /// `None` for endpoints that never look an item up by identifier.
    #[must_use]
    pub const fn not_found_code(self) -> Option<ErrorCode> {
        match self {
            Self::List | Self::Create => None,
            Self::GetById => Some(ErrorCode::new(1, 3)),
            Self::Replace => Some(ErrorCode::new(3, 1)),
            Self::Patch => Some(ErrorCode::new(4, 4)),
            Self::Delete => Some(ErrorCode::new(5, 1)),
        }
    }

    /// Code reported when the store fails.
    #[must_use]
    pub const fn storage_code(self) -> ErrorCode {
        match self {
            Self::List => ErrorCode::new(1, 1),
            Self::GetById => ErrorCode::new(1, 4),
            Self::Create => ErrorCode::new(2, 1),
            Self::Replace => ErrorCode::new(3, 2),
            Self::Patch => ErrorCode::new(4, 5),
            Self::Delete => ErrorCode::new(5, 2),
        }
    }

    /// Code reported for any unexpected failure.
    #[must_use]
    pub const fn internal_code(self) -> ErrorCode {
        match self {
            Self::List => ErrorCode::new(1, 2),
            Self::GetById => ErrorCode::new(1, 5),
            Self::Create => ErrorCode::new(2, 2),
            Self::Replace => ErrorCode::new(3, 3),
            Self::Patch => ErrorCode::new(4, 6),
            Self::Delete => ErrorCode::new(5, 3),
        }
    }

    const fn storage_action(self) -> &'static str {
        match self {
            Self::List | Self::GetById => "query",
            Self::Create => "insert into",
            Self::Replace | Self::Patch => "update",
            Self::Delete => "delete from",
        }
    }
}

/// Machine-sortable error code rendered as `EExSS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorCode {
    endpoint: u8,
    step: u8,
}

impl ErrorCode {
    /// Creates a code from endpoint and step ordinals.
    #[must_use]
    pub const fn new(endpoint: u8, step: u8) -> Self {
        Self { endpoint, step }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}x{:02}", self.endpoint, self.step)
    }
}

/// Failure translated for the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    errors: Vec<String>,
}

impl ApiError {
    /// Client error listing every violated constraint.
    #[must_use]
    pub const fn validation(messages: Vec<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            errors: messages,
        }
    }

    /// Item lookup that did not resolve.
    ///
    /// On an endpoint without a lookup this is a defect and is reported as
    /// an internal failure.
    #[must_use]
    pub fn not_found(endpoint: Endpoint) -> Self {
        endpoint.not_found_code().map_or_else(
            || {
                tracing::error!(?endpoint, "not-found outcome on an endpoint without a lookup");
                Self::internal(endpoint)
            },
            |code| Self::coded(StatusCode::NOT_FOUND, code, "todo not found"),
        )
    }

    /// Store failure, reported to the client without retry.
    #[must_use]
    pub fn storage(endpoint: Endpoint) -> Self {
        let message = format!("failed to {} the database", endpoint.storage_action());
        Self::coded(StatusCode::BAD_REQUEST, endpoint.storage_code(), &message)
    }

    /// Unexpected failure with no detail exposed.
    #[must_use]
    pub fn internal(endpoint: Endpoint) -> Self {
        Self::coded(
            StatusCode::INTERNAL_SERVER_ERROR,
            endpoint.internal_code(),
            "internal server error",
        )
    }

    /// Classifies a service failure for the given endpoint and logs its cause.
    #[must_use]
    pub fn from_service(endpoint: Endpoint, err: TodoServiceError) -> Self {
        match err {
            TodoServiceError::Validation(errors) => Self::validation(errors.messages()),
            TodoServiceError::NotFound(_) => Self::not_found(endpoint),
            TodoServiceError::Repository(TodoRepositoryError::NotFound(_)) => {
                Self::not_found(endpoint)
            }
            TodoServiceError::Repository(TodoRepositoryError::Storage(cause)) => {
                let error = Self::storage(endpoint);
                tracing::warn!(?endpoint, code = %endpoint.storage_code(), %cause, "storage failure");
                error
            }
            TodoServiceError::Repository(TodoRepositoryError::Internal(cause)) => {
                let error = Self::internal(endpoint);
                tracing::error!(?endpoint, code = %endpoint.internal_code(), %cause, "internal failure");
                error
            }
        }
    }

    /// Returns the HTTP status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the client-facing messages.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    fn coded(status: StatusCode, code: ErrorCode, message: &str) -> Self {
        Self {
            status,
            errors: vec![format!("{code} {message}")],
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(Envelope::<()>::failure(self.errors))).into_response()
    }
}
