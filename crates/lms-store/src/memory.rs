use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use lms_types::Book;

use crate::error::{StoreError, StoreResult};
use crate::traits::BookStore;

/// In-memory, `Vec`-based book repository.
///
/// Books live in insertion order behind a `RwLock`. Every lookup is a linear
/// scan. A poisoned lock is recovered rather than reported, since no write
/// leaves the list half-updated.
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
        }
    }

    /// Create a repository holding `books`, skipping duplicate ISBNs.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let repo = Self::new();
        repo.add_books(books.into_iter().collect());
        repo
    }

    /// Returns `true` if the repository holds no books.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Remove all books.
    pub fn clear(&self) {
        self.write().clear();
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Book>> {
        self.books.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Book>> {
        self.books.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn position(books: &[Book], isbn: &str) -> Option<usize> {
    books.iter().position(|b| b.isbn() == isbn)
}

impl BookStore for InMemoryBookRepository {
    fn add_book(&self, book: Book) {
        let mut books = self.write();
        if position(&books, book.isbn()).is_some() {
            tracing::trace!(isbn = book.isbn(), "duplicate isbn ignored");
            return;
        }
        tracing::debug!(isbn = book.isbn(), "book added");
        books.push(book);
    }

    fn try_add_book(&self, book: Book) -> StoreResult<()> {
        let mut books = self.write();
        if position(&books, book.isbn()).is_some() {
            return Err(StoreError::DuplicateIsbn(book.isbn().to_string()));
        }
        tracing::debug!(isbn = book.isbn(), "book added");
        books.push(book);
        Ok(())
    }

    fn has_book(&self, isbn: &str) -> bool {
        position(&self.read(), isbn).is_some()
    }

    fn remove_book(&self, isbn: &str) -> bool {
        let mut books = self.write();
        match position(&books, isbn) {
            Some(idx) => {
                books.remove(idx);
                tracing::debug!(isbn, "book removed");
                true
            }
            None => false,
        }
    }

    fn book_count(&self) -> usize {
        self.read().len()
    }

    fn get_book_by_isbn(&self, isbn: &str) -> Option<Book> {
        self.read().iter().find(|b| b.isbn() == isbn).cloned()
    }

    fn all_books(&self) -> Vec<Book> {
        self.read().clone()
    }
}

impl std::fmt::Debug for InMemoryBookRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryBookRepository")
            .field("book_count", &self.book_count())
            .finish()
    }
}
