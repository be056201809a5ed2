use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors raised while configuring or starting the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Errors returned by the book endpoints. Each maps to one status code and
/// a plain-text body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Book data is required.")]
    BookDataRequired,

    #[error("Malformed book data: {0}")]
    MalformedBook(String),

    #[error("ISBN is required.")]
    IsbnRequired,

    #[error("Book with ISBN {0} already exists.")]
    Conflict(String),

    #[error("Book with ISBN {0} not found.")]
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BookDataRequired | Self::MalformedBook(_) | Self::IsbnRequired => {
                StatusCode::BAD_REQUEST
            }
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<lms_store::StoreError> for ApiError {
    fn from(err: lms_store::StoreError) -> Self {
        match err {
            lms_store::StoreError::DuplicateIsbn(isbn) => Self::Conflict(isbn),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
