use lms_types::Book;

use crate::error::StoreResult;

/// Ordered book collection, unique by ISBN.
///
/// All implementations must satisfy these invariants:
/// - At most one book per distinct ISBN at any time.
/// - Books are kept in insertion order.
/// - No operation fails for an unknown or malformed ISBN.
/// - Returned books are copies; mutating them never affects the store.
pub trait BookStore: Send + Sync {
    /// Append `book` unless a book with the same ISBN is already held.
    ///
    /// A duplicate is a silent no-op, even when title or author differ.
    fn add_book(&self, book: Book);

    /// Append `book`, reporting a duplicate ISBN instead of ignoring it.
    ///
    /// The check and the insert happen under a single lock.
    fn try_add_book(&self, book: Book) -> StoreResult<()>;

    /// Whether a book with exactly this ISBN is held.
    fn has_book(&self, isbn: &str) -> bool;

    /// Remove the book with this ISBN. Returns `true` if one was removed.
    fn remove_book(&self, isbn: &str) -> bool;

    /// Number of books currently held.
    fn book_count(&self) -> usize;

    /// Look up a book by ISBN.
    ///
    /// Returns `None` if no book has this ISBN.
    fn get_book_by_isbn(&self, isbn: &str) -> Option<Book>;

    /// Snapshot of every book in insertion order.
    fn all_books(&self) -> Vec<Book>;

    /// Add several books in order, skipping duplicates.
    ///
    /// Default implementation calls `add_book()` for each book.
    fn add_books(&self, books: Vec<Book>) {
        for book in books {
            self.add_book(book);
        }
    }
}
