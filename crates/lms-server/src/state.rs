use std::sync::Arc;
use std::time::Instant;

use lms_store::{BookStore, InMemoryBookRepository};

/// State shared by every request handler.
///
/// The server owns exactly one repository for its whole lifetime; handlers
/// reach it through this state rather than through a global.
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookStore>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(books: Arc<dyn BookStore>) -> Self {
        Self {
            books,
            started_at: Instant::now(),
        }
    }

    /// State backed by a fresh, empty in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryBookRepository::new()))
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("book_count", &self.books.book_count())
            .field("started_at", &self.started_at)
            .finish()
    }
}
