//! Book endpoints: a thin adapter from HTTP verbs to [`BookStore`] calls.
//!
//! [`BookStore`]: lms_store::BookStore

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::response::Json;
use lms_types::Book;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::router::endpoints;
use crate::state::AppState;

/// Body accepted by `POST /api/books`.
///
/// Every field is optional on the wire so that a missing ISBN is reported
/// as such instead of as a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct NewBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
}

impl NewBook {
    /// Parse a request body. An empty body or a JSON `null` means no book.
    pub fn parse(body: &[u8]) -> ApiResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ApiError::BookDataRequired);
        }
        serde_json::from_slice::<Option<NewBook>>(body)
            .map_err(|e| ApiError::MalformedBook(e.to_string()))?
            .ok_or(ApiError::BookDataRequired)
    }

    /// Convert into a [`Book`], rejecting a missing or blank ISBN.
    pub fn into_book(self) -> ApiResult<Book> {
        let isbn = match self.isbn {
            Some(isbn) if !isbn.trim().is_empty() => isbn,
            _ => return Err(ApiError::IsbnRequired),
        };
        Ok(Book::new(
            self.title.unwrap_or_default(),
            self.author.unwrap_or_default(),
            isbn,
        ))
    }
}

/// Location of a book, with the ISBN percent-encoded.
pub fn book_location(isbn: &str) -> String {
    format!("{}/{}", endpoints::BOOKS, urlencoding::encode(isbn))
}

/// `GET /api/books`
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.books.all_books())
}

/// `GET /api/books/:isbn`
pub async fn get_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> ApiResult<Json<Book>> {
    state
        .books
        .get_book_by_isbn(&isbn)
        .map(Json)
        .ok_or(ApiError::NotFound(isbn))
}

/// `POST /api/books`
pub async fn create_book(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, [(HeaderName, String); 1], Json<Book>)> {
    let book = NewBook::parse(&body)?.into_book()?;

    if let Err(err) = state.books.try_add_book(book.clone()) {
        tracing::info!(isbn = book.isbn(), "rejected duplicate book");
        return Err(err.into());
    }
    tracing::info!(%book, "book created");

    let location = book_location(book.isbn());
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(book)))
}

/// `DELETE /api/books/:isbn`
pub async fn delete_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> ApiResult<StatusCode> {
    remove_book(&state, isbn)
}

/// `DELETE /api/books/count`
///
/// The literal `count` route shadows `:isbn` for every method it serves,
/// so a book whose ISBN is `count` is deleted here.
pub async fn delete_count_book(State(state): State<AppState>) -> ApiResult<StatusCode> {
    remove_book(&state, COUNT_SEGMENT.to_string())
}

const COUNT_SEGMENT: &str = "count";

fn remove_book(state: &AppState, isbn: String) -> ApiResult<StatusCode> {
    if !state.books.remove_book(&isbn) {
        return Err(ApiError::NotFound(isbn));
    }
    tracing::info!(%isbn, "book deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/books/count`
pub async fn book_count(State(state): State<AppState>) -> Json<usize> {
    Json(state.books.book_count())
}

/// `GET /api/books/exists/:isbn`
pub async fn book_exists(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Json<bool> {
    Json(state.books.has_book(&isbn))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_body() {
        let book = NewBook::parse(br#"{"title":"1984","author":"George Orwell","isbn":"1234567890"}"#)
            .unwrap()
            .into_book()
            .unwrap();
        assert_eq!(book, Book::new("1984", "George Orwell", "1234567890"));
    }

    #[test]
    fn null_and_empty_bodies_are_missing_data() {
        let bodies: [&[u8]; 3] = [b"", b"   ", b"null"];
        for body in bodies {
            assert!(matches!(NewBook::parse(body), Err(ApiError::BookDataRequired)));
        }
    }

    #[test]
    fn garbage_body_is_malformed() {
        assert!(matches!(NewBook::parse(b"{not json"), Err(ApiError::MalformedBook(_))));
        assert!(matches!(NewBook::parse(b"[1,2]"), Err(ApiError::MalformedBook(_))));
    }

    #[test]
    fn blank_isbn_is_rejected() {
        let bodies: [&[u8]; 4] = [
            br#"{"title":"t","author":"a"}"#,
            br#"{"title":"t","author":"a","isbn":null}"#,
            br#"{"title":"t","author":"a","isbn":""}"#,
            br#"{"title":"t","author":"a","isbn":" \t "}"#,
        ];
        for body in bodies {
            let result = NewBook::parse(body).unwrap().into_book();
            assert!(matches!(result, Err(ApiError::IsbnRequired)));
        }
    }

    #[test]
    fn missing_title_and_author_default_to_empty() {
        let book = NewBook::parse(br#"{"isbn":"42"}"#).unwrap().into_book().unwrap();
        assert_eq!(book.title(), "");
        assert_eq!(book.author(), "");
    }

    #[test]
    fn location_is_percent_encoded() {
        assert_eq!(book_location("1234567890"), "/api/books/1234567890");
        assert_eq!(book_location("a b/c"), "/api/books/a%20b%2Fc");
    }
}
