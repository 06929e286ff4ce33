//! Validated scalar types for to-do fields.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// To-do title, between 3 and 200 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    /// Shortest accepted title, in characters.
    pub const MIN_CHARS: usize = 3;
    /// Longest accepted title, in characters.
    pub const MAX_CHARS: usize = 200;

    /// Creates a validated title.
    ///
    /// Length is counted in Unicode scalar values, not bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::TitleTooShort`] or
    /// [`TodoDomainError::TitleTooLong`] when the length is out of bounds.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        let length = raw.chars().count();
        if length < Self::MIN_CHARS {
            return Err(TodoDomainError::TitleTooShort {
                min: Self::MIN_CHARS,
                actual: length,
            });
        }
        if length > Self::MAX_CHARS {
            return Err(TodoDomainError::TitleTooLong {
                max: Self::MAX_CHARS,
                actual: length,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the title and returns the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form to-do description of at most 1000 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    /// Longest accepted description, in characters.
    pub const MAX_CHARS: usize = 1000;

    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::DescriptionTooLong`] when the description
    /// exceeds [`Self::MAX_CHARS`].
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        let length = raw.chars().count();
        if length > Self::MAX_CHARS {
            return Err(TodoDomainError::DescriptionTooLong {
                max: Self::MAX_CHARS,
                actual: length,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the description and returns the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// To-do priority in the inclusive range 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(u8);

impl Priority {
    /// Lowest priority.
    pub const MIN: u8 = 1;
    /// Highest priority.
    pub const MAX: u8 = 5;

    /// Creates a validated priority.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::PriorityOutOfRange`] when the value is
    /// outside `1..=5`.
    pub fn new(value: i64) -> Result<Self, TodoDomainError> {
        u8::try_from(value)
            .ok()
            .filter(|candidate| (Self::MIN..=Self::MAX).contains(candidate))
            .map(Self)
            .ok_or(TodoDomainError::PriorityOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            })
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
