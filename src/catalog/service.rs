//! CatalogService - validation and operations over a catalog store.
//!
//! `CatalogService<S>` holds a store and exposes the six catalog operations.
//! Each operation validates its input before touching the store, so a
//! rejected request never mutates anything.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use super::{BookDetail, BookSummary, CatalogStore, CreatedBook};
use crate::error::CatalogError;

/// Request body for creating a book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateBook {
    #[serde(default, deserialize_with = "text_field")]
    pub title: Option<String>,
}

/// Request body for appending a comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AddComment {
    #[serde(default, deserialize_with = "text_field")]
    pub comment: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrOther {
    Text(String),
    Other(IgnoredAny),
}

/// A string field; any non-string value (number, bool, array, object)
/// counts as absent.
fn text_field<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<TextOrOther>::deserialize(deserializer)? {
        Some(TextOrOther::Text(text)) => Some(text),
        Some(TextOrOther::Other(_)) | None => None,
    })
}

/// Treat an empty string the same as an absent field.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// The catalog operations, generic over `S`, the store type.
pub struct CatalogService<S> {
    store: S,
}

impl<S: CatalogStore> CatalogService<S> {
    /// Create a new service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Summaries of every book, in creation order.
    pub fn list_books(&self) -> Result<Vec<BookSummary>, CatalogError> {
        Ok(self.store.list()?.iter().map(|b| b.summary()).collect())
    }

    /// Create a book. Fails with `MissingTitle` if the title is absent or empty.
    pub fn create_book(&self, title: Option<String>) -> Result<CreatedBook, CatalogError> {
        let title = present(title).ok_or(CatalogError::MissingTitle)?;
        let book = self.store.insert(title)?;
        Ok(CreatedBook::from(&book))
    }

    /// Fetch one book with its comments.
    pub fn get_book(&self, id: &str) -> Result<BookDetail, CatalogError> {
        self.store
            .get(id)?
            .map(|b| b.detail())
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Append a comment to a book and return the updated book.
    ///
    /// An unknown id is reported as `NotFound` even when the comment is
    /// missing too.
    pub fn add_comment(
        &self,
        id: &str,
        comment: Option<String>,
    ) -> Result<BookDetail, CatalogError> {
        let Some(comment) = present(comment) else {
            return match self.store.get(id)? {
                Some(_) => Err(CatalogError::MissingComment),
                None => Err(CatalogError::NotFound(id.to_string())),
            };
        };

        self.store
            .append_comment(id, comment)?
            .map(|b| b.detail())
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Delete one book.
    pub fn delete_book(&self, id: &str) -> Result<(), CatalogError> {
        if self.store.remove(id)? {
            Ok(())
        } else {
            Err(CatalogError::NotFound(id.to_string()))
        }
    }

    /// Delete every book. Returns how many were removed.
    pub fn delete_all(&self) -> Result<usize, CatalogError> {
        self.store.clear()
    }

    /// Number of stored books.
    pub fn count(&self) -> Result<usize, CatalogError> {
        self.store.len()
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
