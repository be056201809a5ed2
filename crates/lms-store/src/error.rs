/// Errors from book store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// A book with this ISBN is already in the store.
    #[error("book with ISBN {0} already exists")]
    DuplicateIsbn(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
