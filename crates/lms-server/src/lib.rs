//! HTTP server for the library catalog.
//!
//! Exposes the book repository as a REST API under `/api/books`, serves a
//! small web front end at `/`, and admits cross-origin calls from the
//! configured origins.

pub mod books;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::{ServerConfig, DEFAULT_ALLOWED_ORIGINS};
pub use error::{ApiError, ApiResult, ServerError, ServerResult};
pub use server::LmsServer;
pub use state::AppState;
