//! Error types for to-do field and query parameter validation.

use thiserror::Error;

/// Errors returned while constructing validated to-do field values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The title was not supplied.
    #[error("title is required")]
    MissingTitle,

    /// The title is shorter than the minimum length.
    #[error("title must have at least {min} characters")]
    TitleTooShort {
        /// Minimum accepted length in characters.
        min: usize,
        /// Supplied length in characters.
        actual: usize,
    },

    /// The title is longer than the maximum length.
    #[error("title must not exceed {max} characters")]
    TitleTooLong {
        /// Maximum accepted length in characters.
        max: usize,
        /// Supplied length in characters.
        actual: usize,
    },

    /// The description is longer than the maximum length.
    #[error("description must not exceed {max} characters")]
    DescriptionTooLong {
        /// Maximum accepted length in characters.
        max: usize,
        /// Supplied length in characters.
        actual: usize,
    },

    /// The priority was not supplied.
    #[error("priority is required")]
    MissingPriority,

    /// The priority is outside the accepted range.
    #[error("priority must be between {min} and {max}")]
    PriorityOutOfRange {
        /// Lowest accepted priority.
        min: u8,
        /// Highest accepted priority.
        max: u8,
        /// Supplied priority.
        actual: i64,
    },
}

/// Errors returned while constructing list query parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoQueryError {
    /// The page index is negative.
    #[error("page must not be negative")]
    NegativePage(i64),

    /// The page index does not fit the supported range.
    #[error("page must not exceed {max}")]
    PageTooLarge {
        /// Largest accepted page index.
        max: u32,
        /// Supplied page index.
        actual: i64,
    },

    /// The page size is outside the accepted range.
    #[error("page size must be between {min} and {max}")]
    PageSizeOutOfRange {
        /// Smallest accepted page size.
        min: u32,
        /// Largest accepted page size.
        max: u32,
        /// Supplied page size.
        actual: i64,
    },

    /// The completion filter code is unknown.
    #[error("isCompleted must be between 0 and 2")]
    UnknownCompletionFilter(i64),

    /// The priority filter code is unknown.
    #[error("priority filter must be between 0 and 5")]
    UnknownPriorityFilter(i64),
}
