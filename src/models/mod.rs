//! Data models for the bookstore catalog

pub mod author;
pub mod book;

// Re-export commonly used types
pub use author::{Author, AuthorSummary, UpdateAuthor};
pub use book::{Book, BookQuery, BookSummary, UpdateBook};

/// Sparse update request: every field is optional and only supplied fields
/// replace the stored value.
pub trait PartialUpdate<T> {
    /// True when the request carries no field at all
    fn is_empty(&self) -> bool;

    /// Merge the supplied fields into `target`, leaving the others untouched
    fn apply_to(self, target: T) -> T;
}

/// Overwrite `slot` only when a value was supplied.
///
/// `Some(Default::default())` is a real value and still overwrites.
pub(crate) fn merge_field<T>(slot: &mut T, supplied: Option<T>) {
    if let Some(value) = supplied {
        *slot = value;
    }
}
