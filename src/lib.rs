//! bookshelf — an in-memory bookstore catalog.
//!
//! Books are created with a title, gather comments in arrival order, and are
//! deleted one at a time or all at once. [`CatalogService`] carries the
//! validation rules, [`InMemoryCatalog`] holds the books, and the `http`
//! module (feature `http`, on by default) serves them as a small JSON/text
//! REST API.

mod catalog;
mod error;

#[cfg(feature = "http")]
pub mod config;
#[cfg(feature = "http")]
pub mod http;

pub use catalog::{
    AddComment, Book, BookDetail, BookId, BookSummary, CatalogService, CatalogStore, CreateBook,
    CreatedBook, InMemoryCatalog,
};
pub use error::CatalogError;

#[cfg(feature = "http")]
pub use config::Config;
