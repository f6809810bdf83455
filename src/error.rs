//! Error type for catalog operations.
//!
//! Validation and lookup failures are ordinary outcomes of the catalog
//! contract: their `Display` text is exactly the plain-text body the HTTP
//! layer returns for them.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Create was called without a (non-empty) title.
    #[error("missing title")]
    MissingTitle,
    /// Append-comment was called without a (non-empty) comment.
    #[error("missing comment")]
    MissingComment,
    /// No book is stored under the given id.
    #[error("no book exists")]
    NotFound(String),
    /// A writer panicked while holding the catalog lock.
    #[error("catalog lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl CatalogError {
    /// Whether this error is part of the catalog's normal contract (reported
    /// with a success status) rather than an internal failure.
    pub fn is_contract_outcome(&self) -> bool {
        !matches!(self, CatalogError::LockPoisoned(_))
    }

    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        if self.is_contract_outcome() {
            200
        } else {
            500
        }
    }
}
