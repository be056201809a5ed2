use std::sync::Arc;

use lms_store::{BookStore, InMemoryBookRepository};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::{build_router, cors_layer};
use crate::state::AppState;

/// Library catalog server.
pub struct LmsServer {
    config: ServerConfig,
    state: AppState,
}

impl LmsServer {
    /// Create a server whose repository holds the configured seed books.
    pub fn new(config: ServerConfig) -> Self {
        let repo = InMemoryBookRepository::new();
        repo.add_books(config.seed_books.clone());
        let state = AppState::new(Arc::new(repo));
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Build the router with CORS applied (useful for testing).
    pub fn router(&self) -> ServerResult<axum::Router> {
        let cors = cors_layer(&self.config.allowed_origins)?;
        Ok(build_router(self.state.clone()).layer(cors))
    }

    /// Start serving requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router()?;
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            books = self.state.books.book_count(),
            "LMS server listening on {}",
            listener.local_addr()?
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("LMS server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_types::Book;

    #[test]
    fn server_construction() {
        let server = LmsServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:5000".parse().unwrap());
        assert_eq!(server.state().books.book_count(), 0);
    }

    #[test]
    fn seed_books_are_loaded_once() {
        let config = ServerConfig {
            seed_books: vec![
                Book::new("1984", "George Orwell", "1234567890"),
                Book::new("Copy", "Someone", "1234567890"),
                Book::new("Dune", "Frank Herbert", "42"),
            ],
            ..ServerConfig::default()
        };
        let server = LmsServer::new(config);
        assert_eq!(server.state().books.book_count(), 2);
    }

    #[test]
    fn router_builds() {
        let server = LmsServer::new(ServerConfig::default());
        assert!(server.router().is_ok());
    }

    #[test]
    fn router_rejects_bad_origin() {
        let config = ServerConfig {
            allowed_origins: vec!["\u{7f}".into()],
            ..ServerConfig::default()
        };
        assert!(LmsServer::new(config).router().is_err());
    }
}
