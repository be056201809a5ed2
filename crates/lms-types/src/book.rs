use std::fmt;

use serde::{Deserialize, Serialize};

/// A catalog record.
///
/// Books are immutable once constructed. The ISBN is the only identity a
/// book has; it is never validated, so any string (including the empty
/// string) is accepted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    isbn: String,
}

impl Book {
    /// Create a new book. No validation is performed.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// The unique identifier of this book within a repository.
    pub fn isbn(&self) -> &str {
        &self.isbn
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" by {} (ISBN {})", self.title, self.author, self.isbn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let book = Book::new("1984", "George Orwell", "1234567890");
        assert_eq!(book.title(), "1984");
        assert_eq!(book.author(), "George Orwell");
        assert_eq!(book.isbn(), "1234567890");
    }

    #[test]
    fn empty_fields_are_accepted() {
        let book = Book::new("", "Unknown Author", "");
        assert_eq!(book.title(), "");
        assert_eq!(book.isbn(), "");
    }

    #[test]
    fn display() {
        let book = Book::new("The Great Gatsby", "F. Scott Fitzgerald", "1111111111");
        assert_eq!(
            format!("{book}"),
            "\"The Great Gatsby\" by F. Scott Fitzgerald (ISBN 1111111111)"
        );
    }

    #[test]
    fn json_shape() {
        let book = Book::new("To Kill a Mockingbird", "Harper Lee", "0987654321");
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "To Kill a Mockingbird",
                "author": "Harper Lee",
                "isbn": "0987654321",
            })
        );
    }

    #[test]
    fn parses_from_json() {
        let book: Book =
            serde_json::from_str(r#"{"title":"1984","author":"George Orwell","isbn":"1234567890"}"#)
                .unwrap();
        assert_eq!(book, Book::new("1984", "George Orwell", "1234567890"));
    }
}
