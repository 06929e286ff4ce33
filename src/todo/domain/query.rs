//! Paged, filtered listing of to-do items.
//!
//! A [`TodoQuery`] selects items by completion state and priority, orders
//! them by creation time (identifier breaks ties) and slices out one page.
//! The total match count is computed before slicing so callers can derive
//! the number of pages without fetching everything.

use super::{Priority, Todo, TodoQueryError};

/// Completion-state filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CompletionFilter {
    /// Only items that are not completed (wire code `0`).
    Incomplete,
    /// Only completed items (wire code `1`).
    Complete,
    /// Items in any completion state (wire code `2`).
    #[default]
    Any,
}

impl CompletionFilter {
    /// Returns the wire code.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Incomplete => 0,
            Self::Complete => 1,
            Self::Any => 2,
        }
    }

    /// Returns the completion flag selected, or `None` for [`Self::Any`].
    #[must_use]
    pub const fn selected(self) -> Option<bool> {
        match self {
            Self::Incomplete => Some(false),
            Self::Complete => Some(true),
            Self::Any => None,
        }
    }

    /// Returns `true` when an item with the given flag passes the filter.
    #[must_use]
    pub fn matches(self, is_completed: bool) -> bool {
        self.selected().is_none_or(|wanted| wanted == is_completed)
    }
}

impl TryFrom<i64> for CompletionFilter {
    type Error = TodoQueryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Incomplete),
            1 => Ok(Self::Complete),
            2 => Ok(Self::Any),
            _ => Err(TodoQueryError::UnknownCompletionFilter(value)),
        }
    }
}

/// Priority filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PriorityFilter {
    /// Items of any priority (wire code `0`).
    #[default]
    Any,
    /// Items whose priority equals the given value (wire codes `1..=5`).
    Exactly(Priority),
}

impl PriorityFilter {
    /// Returns the wire code.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Any => 0,
            Self::Exactly(priority) => i64::from(priority.value()),
        }
    }

    /// Returns `true` when an item with the given priority passes the filter.
    #[must_use]
    pub fn matches(self, priority: Priority) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(wanted) => wanted == priority,
        }
    }
}

impl TryFrom<i64> for PriorityFilter {
    type Error = TodoQueryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value == 0 {
            return Ok(Self::Any);
        }
        Priority::new(value)
            .map(Self::Exactly)
            .map_err(|_| TodoQueryError::UnknownPriorityFilter(value))
    }
}

/// Number of items per page, between 1 and 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(u32);

impl PageSize {
    /// Smallest accepted page size.
    pub const MIN: u32 = 1;
    /// Largest accepted page size.
    pub const MAX: u32 = 100;
    /// Page size used when the caller does not choose one.
    pub const DEFAULT: Self = Self(10);

    /// Creates a validated page size.
    ///
    /// # Errors
    ///
    /// Returns [`TodoQueryError::PageSizeOutOfRange`] when the value is
    /// outside `1..=100`.
    pub fn new(value: i64) -> Result<Self, TodoQueryError> {
        u32::try_from(value)
            .ok()
            .filter(|candidate| (Self::MIN..=Self::MAX).contains(candidate))
            .map(Self)
            .ok_or(TodoQueryError::PageSizeOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            })
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Validated filter and paging specification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TodoQuery {
    page: u32,
    page_size: PageSize,
    completion: CompletionFilter,
    priority: PriorityFilter,
}

impl TodoQuery {
    /// Largest accepted zero-based page index.
    pub const MAX_PAGE: u32 = 2_147_483_647;

    /// Creates a query from validated parts.
    #[must_use]
    pub const fn new(
        page: u32,
        page_size: PageSize,
        completion: CompletionFilter,
        priority: PriorityFilter,
    ) -> Self {
        Self {
            page,
            page_size,
            completion,
            priority,
        }
    }

    /// Validates a raw zero-based page index.
    ///
    /// # Errors
    ///
    /// Returns [`TodoQueryError::NegativePage`] for negative values and
    /// [`TodoQueryError::PageTooLarge`] above [`Self::MAX_PAGE`].
    pub fn page_index(value: i64) -> Result<u32, TodoQueryError> {
        if value < 0 {
            return Err(TodoQueryError::NegativePage(value));
        }
        u32::try_from(value)
            .ok()
            .filter(|page| *page <= Self::MAX_PAGE)
            .ok_or(TodoQueryError::PageTooLarge {
                max: Self::MAX_PAGE,
                actual: value,
            })
    }

    /// Sets the page index.
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the completion filter.
    #[must_use]
    pub const fn with_completion(mut self, completion: CompletionFilter) -> Self {
        self.completion = completion;
        self
    }

    /// Sets the priority filter.
    #[must_use]
    pub const fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the zero-based page index.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Returns the completion filter.
    #[must_use]
    pub const fn completion(&self) -> CompletionFilter {
        self.completion
    }

    /// Returns the priority filter.
    #[must_use]
    pub const fn priority(&self) -> PriorityFilter {
        self.priority
    }

    /// Returns `true` when the item passes both filters.
    #[must_use]
    pub fn matches(&self, todo: &Todo) -> bool {
        self.completion.matches(todo.is_completed()) && self.priority.matches(todo.priority())
    }

    /// Number of matching items skipped before the page starts.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.page_size.0)
    }

    /// Maximum number of items in the page.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.page_size.0
    }

    /// Runs the query over a full collection of items.
    ///
    /// Filters, counts, orders by `(created_at, id)` and slices one page.
    #[must_use]
    pub fn paginate(&self, todos: impl IntoIterator<Item = Todo>) -> TodoPage {
        let mut matching: Vec<Todo> = todos.into_iter().filter(|todo| self.matches(todo)).collect();
        let total = u64::try_from(matching.len()).unwrap_or(u64::MAX);
        matching.sort_by_key(|todo| (todo.created_at(), todo.id()));

        let skip = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(self.limit()).unwrap_or(usize::MAX);
        let items = matching.into_iter().skip(skip).take(take).collect();

        TodoPage {
            items,
            total,
            page: self.page,
            page_size: self.page_size.0,
        }
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPage {
    /// Items on this page, ordered by creation time.
    pub items: Vec<Todo>,
    /// Number of items matching the filters across all pages.
    pub total: u64,
    /// Zero-based page index.
    pub page: u32,
    /// Requested page size.
    pub page_size: u32,
}
