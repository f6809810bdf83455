//! CatalogStore - Abstract storage for books.

use super::Book;
use crate::error::CatalogError;

/// Abstract storage for books.
///
/// Implementations own identifier allocation: ids are assigned inside
/// [`insert`](CatalogStore::insert) and never reused by the same store.
pub trait CatalogStore: Send + Sync {
    /// All stored books, in the order they were created.
    fn list(&self) -> Result<Vec<Book>, CatalogError>;

    /// Allocate a fresh id and store a new book with no comments.
    fn insert(&self, title: String) -> Result<Book, CatalogError>;

    /// Get a book by id. Returns None if not found.
    fn get(&self, id: &str) -> Result<Option<Book>, CatalogError>;

    /// Append a comment to a book. Returns the updated book, or None if
    /// no book has that id.
    fn append_comment(&self, id: &str, comment: String) -> Result<Option<Book>, CatalogError>;

    /// Delete a book by id. Returns true if it existed.
    fn remove(&self, id: &str) -> Result<bool, CatalogError>;

    /// Delete every book. Returns how many were removed.
    fn clear(&self) -> Result<usize, CatalogError>;

    /// Number of stored books.
    fn len(&self) -> Result<usize, CatalogError>;

    fn is_empty(&self) -> Result<bool, CatalogError> {
        Ok(self.len()? == 0)
    }
}
