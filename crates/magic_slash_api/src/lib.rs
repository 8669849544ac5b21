//! Magic Slash configuration web UI
//!
//! A small local HTTP server exposing the Magic Slash configuration file
//! through a JSON REST API, plus the static single-page client that
//! consumes it.
//!
//! # Architecture
//!
//! This crate is the HTTP layer only:
//! - HTTP request/response translation
//! - Error mapping from domain to HTTP
//! - Routing, static assets and server lifecycle
//!
//! All reading, validation and persistence lives in `magic_slash_config`.
//! The dependency flows HTTP API → configuration store, never the reverse.

use std::sync::Arc;

use magic_slash_config::ConfigStore;
use tokio::sync::Notify;

pub mod browser;
pub mod errors;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod translation;

// Re-export key types for convenience
pub use errors::{ApiError, ErrorResponse};
pub use models::{request, response};
pub use server::{ApiConfig, ApiServer};

/// Default port of the web UI
pub const DEFAULT_PORT: u16 = 3847;

/// Default bind address; the UI is only meant to be reached locally
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Directory holding the client assets shipped with this crate
pub const DEFAULT_PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

/// Application state shared across handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Store for the configuration file
    pub store: Arc<ConfigStore>,

    /// Signalled when a client asks the server to stop
    pub shutdown: Arc<Notify>,
}

impl AppState {
    /// Create new application state around a configuration store
    pub fn new(store: ConfigStore) -> Self {
        Self {
            store: Arc::new(store),
            shutdown: Arc::new(Notify::new()),
        }
    }
}
