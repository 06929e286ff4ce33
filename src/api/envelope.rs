//! Uniform JSON wrapper for every response body.

use serde::Serialize;

/// Response envelope carrying either a payload or a list of error messages.
///
/// Serialises as `{"data": ..., "errors": [...]}`; `data` is `null` on
/// failure and `errors` is empty on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
    data: Option<T>,
    errors: Vec<String>,
}

impl<T> Envelope<T> {
    /// Wraps a successful payload.
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    /// Wraps a list of error messages.
    #[must_use]
    pub const fn failure(errors: Vec<String>) -> Self {
        Self { data: None, errors }
    }

    /// Returns the payload, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Returns the error messages.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}
