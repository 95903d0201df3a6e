//! Error type for the paging engine.
use thiserror::Error;

/// Errors surfaced synchronously by the paging engine.
///
/// Both variants are caller mistakes: nothing here is retried or recovered
/// internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagingError {
    /// A page index outside `[0, page_count - 1]` was requested.
    #[error("page index {index} is out of range for {page_count} page(s)")]
    OutOfRange { index: isize, page_count: usize },
    /// A layout style offset that collapses the spacing distance to zero.
    #[error("layout style offset {offset} gives a zero spacing distance")]
    Configuration { offset: i32 },
}

/// Convenience alias used across the crate.
pub type Result<T, E = PagingError> = std::result::Result<T, E>;
