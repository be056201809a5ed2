use std::net::SocketAddr;
use std::path::Path;

use lms_types::Book;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Origins allowed to call the API from a browser when none are configured:
/// the local front-end dev server and the hosted front end.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = [
    "http://localhost:4200",
    "https://library-management-svc.onrender.com",
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub allowed_origins: Vec<String>,
    /// Books loaded into the repository at startup.
    pub seed_books: Vec<Book>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
            seed_books: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document. Missing keys take their default values.
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Read and parse a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded server config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> ServerResult<String> {
        toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))
    }
}
