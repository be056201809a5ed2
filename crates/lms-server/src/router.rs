use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::books;
use crate::error::{ServerError, ServerResult};
use crate::handler;
use crate::state::AppState;

/// HTTP endpoint paths.
pub mod endpoints {
    pub const BOOKS: &str = "/api/books";
    pub const BOOK: &str = "/api/books/:isbn";
    pub const BOOK_COUNT: &str = "/api/books/count";
    pub const BOOK_EXISTS: &str = "/api/books/exists/:isbn";
    pub const HEALTH: &str = "/health";
    pub const INFO: &str = "/info";
    pub const INDEX: &str = "/";
}

/// Build the axum router with all LMS endpoints.
///
/// The literal `count` segment wins over `:isbn`, so `GET /api/books/count`
/// always returns the count while `DELETE /api/books/count` removes the book
/// whose ISBN is `count`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::INDEX, get(handler::index_handler))
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .route(
            endpoints::BOOKS,
            get(books::list_books).post(books::create_book),
        )
        .route(
            endpoints::BOOK_COUNT,
            get(books::book_count).delete(books::delete_count_book),
        )
        .route(endpoints::BOOK_EXISTS, get(books::book_exists))
        .route(
            endpoints::BOOK,
            get(books::get_book).delete(books::delete_book),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy admitting exactly `origins`, with any method and header.
/// A `*` entry admits every origin.
pub fn cors_layer(origins: &[String]) -> ServerResult<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        return Ok(layer.allow_origin(Any));
    }
    let origins = origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).map_err(|_| ServerError::InvalidOrigin(o.clone()))
        })
        .collect::<ServerResult<Vec<_>>>()?;
    Ok(layer.allow_origin(origins))
}
