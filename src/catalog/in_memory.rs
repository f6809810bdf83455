//! InMemoryCatalog - HashMap-backed catalog store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use super::{Book, CatalogStore};
use crate::error::CatalogError;

/// Internal stored representation of a book.
struct StoredBook {
    /// Position in the creation sequence; orders the listing.
    seq: u64,
    book: Book,
}

struct Shelf {
    books: HashMap<String, StoredBook>,
    next_id: u64,
}

/// In-memory catalog backed by a HashMap.
///
/// The id sequence lives behind the same lock as the books, so allocation
/// and insertion happen in one step. Clone-friendly via Arc; clones share
/// the same books.
#[derive(Clone)]
pub struct InMemoryCatalog {
    storage: Arc<RwLock<Shelf>>,
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCatalog {
    /// Create a new empty catalog. The first id handed out is `"1"`.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(Shelf {
                books: HashMap::new(),
                next_id: 1,
            })),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Shelf>, CatalogError> {
        self.storage.read().map_err(|_| {
            warn!("catalog lock poisoned on read");
            CatalogError::LockPoisoned("read")
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Shelf>, CatalogError> {
        self.storage.write().map_err(|_| {
            warn!("catalog lock poisoned on write");
            CatalogError::LockPoisoned("write")
        })
    }
}

impl CatalogStore for InMemoryCatalog {
    fn list(&self) -> Result<Vec<Book>, CatalogError> {
        let storage = self.read()?;
        let mut stored: Vec<&StoredBook> = storage.books.values().collect();
        stored.sort_by_key(|s| s.seq);
        Ok(stored.into_iter().map(|s| s.book.clone()).collect())
    }

    fn insert(&self, title: String) -> Result<Book, CatalogError> {
        let mut storage = self.write()?;

        let seq = storage.next_id;
        storage.next_id += 1;

        let book = Book::new(seq.to_string(), title);
        storage.books.insert(
            book.id.clone(),
            StoredBook {
                seq,
                book: book.clone(),
            },
        );

        debug!(id = %book.id, title = %book.title, "book created");
        Ok(book)
    }

    fn get(&self, id: &str) -> Result<Option<Book>, CatalogError> {
        let storage = self.read()?;
        Ok(storage.books.get(id).map(|s| s.book.clone()))
    }

    fn append_comment(&self, id: &str, comment: String) -> Result<Option<Book>, CatalogError> {
        let mut storage = self.write()?;

        match storage.books.get_mut(id) {
            Some(stored) => {
                stored.book.comments.push(comment);
                debug!(id, comments = stored.book.comments.len(), "comment added");
                Ok(Some(stored.book.clone()))
            }
            None => Ok(None),
        }
    }

    fn remove(&self, id: &str) -> Result<bool, CatalogError> {
        let mut storage = self.write()?;
        let existed = storage.books.remove(id).is_some();
        if existed {
            debug!(id, "book deleted");
        }
        Ok(existed)
    }

    fn clear(&self) -> Result<usize, CatalogError> {
        let mut storage = self.write()?;
        let removed = storage.books.len();
        storage.books.clear();
        debug!(removed, "catalog cleared");
        Ok(removed)
    }

    fn len(&self) -> Result<usize, CatalogError> {
        Ok(self.read()?.books.len())
    }
}
