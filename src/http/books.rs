//! Handlers for `/api/books` and `/api/books/:id`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use super::payload::Payload;
use crate::catalog::{
    AddComment, BookDetail, BookSummary, CatalogService, CatalogStore, CreateBook, CreatedBook,
};
use crate::error::CatalogError;

/// `GET /api/books` — every book with its comment count.
pub(super) async fn list<S: CatalogStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
) -> Result<Json<Vec<BookSummary>>, CatalogError> {
    Ok(Json(service.list_books()?))
}

/// `POST /api/books` — create a book from `{title}`.
pub(super) async fn create<S: CatalogStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
    Payload(body): Payload<CreateBook>,
) -> Result<Json<CreatedBook>, CatalogError> {
    Ok(Json(service.create_book(body.title)?))
}

/// `DELETE /api/books` — remove every book.
pub(super) async fn delete_all<S: CatalogStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
) -> Result<&'static str, CatalogError> {
    service.delete_all()?;
    Ok("complete delete successful")
}

/// `GET /api/books/:id` — one book with its comments.
pub(super) async fn get<S: CatalogStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
    Path(id): Path<String>,
) -> Result<Json<BookDetail>, CatalogError> {
    Ok(Json(service.get_book(&id)?))
}

/// `POST /api/books/:id` — append `{comment}` to a book.
pub(super) async fn comment<S: CatalogStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
    Path(id): Path<String>,
    Payload(body): Payload<AddComment>,
) -> Result<Json<BookDetail>, CatalogError> {
    Ok(Json(service.add_comment(&id, body.comment)?))
}

/// `DELETE /api/books/:id` — remove one book.
pub(super) async fn delete<S: CatalogStore + 'static>(
    State(service): State<Arc<CatalogService<S>>>,
    Path(id): Path<String>,
) -> Result<&'static str, CatalogError> {
    service.delete_book(&id)?;
    Ok("delete successful")
}
