//! Catalog - books, their comment threads, and the storage behind them.
//!
//! A [`Book`] is created with a title, collects comments in the order they
//! arrive, and is removed individually or together with every other book.
//! [`CatalogService`] enforces the validation rules on top of any
//! [`CatalogStore`]; [`InMemoryCatalog`] is the process-memory store.
//!
//! ## Example
//!
//! ```ignore
//! use bookshelf::{CatalogService, InMemoryCatalog};
//!
//! let service = CatalogService::new(InMemoryCatalog::new());
//! let created = service.create_book(Some("Dune".into()))?;
//! let book = service.add_comment(&created.id, Some("classic".into()))?;
//! assert_eq!(book.comments, vec!["classic"]);
//! ```

mod in_memory;
mod service;
mod store;

use serde::Serialize;

pub use in_memory::InMemoryCatalog;
pub use service::{AddComment, CatalogService, CreateBook};
pub use store::CatalogStore;

/// Identifier assigned to a book by its store.
pub type BookId = String;

/// A stored book record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub comments: Vec<String>,
}

impl Book {
    pub fn new(id: impl Into<BookId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            comments: Vec::new(),
        }
    }

    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            commentcount: self.comments.len(),
        }
    }

    pub fn detail(&self) -> BookDetail {
        BookDetail {
            id: self.id.clone(),
            title: self.title.clone(),
            comments: self.comments.clone(),
        }
    }
}

/// One entry of the book listing.
///
/// The id is serialized as `_id`, the field name existing clients read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSummary {
    #[serde(rename = "_id")]
    pub id: BookId,
    pub title: String,
    pub commentcount: usize,
}

/// A single book with its full comment thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDetail {
    #[serde(rename = "_id")]
    pub id: BookId,
    pub title: String,
    pub comments: Vec<String>,
}

/// Response to a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedBook {
    #[serde(rename = "_id")]
    pub id: BookId,
    pub title: String,
}

impl From<&Book> for CreatedBook {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
        }
    }
}
