//! Tests for server module

use super::*;
use magic_slash_config::ConfigStore;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = ApiConfig::default();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.host, "127.0.0.1");
    assert!(config.open_browser);
    assert!(config.public_dir.ends_with("public"));
}

#[test]
fn test_local_url_uses_port() {
    let config = ApiConfig {
        port: 4000,
        ..ApiConfig::default()
    };
    assert_eq!(config.local_url(), "http://localhost:4000");
}

#[test]
fn test_server_creation() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let state = AppState::new(ConfigStore::new(temp_dir.path().join("config.json")));
    let server = ApiServer::new(ApiConfig::default(), state);
    let _router = server.router();
}

#[tokio::test]
async fn test_shutdown_signal_returns_when_requested() {
    let requested = Arc::new(Notify::new());
    requested.notify_one();

    tokio::time::timeout(Duration::from_secs(5), shutdown_signal(requested))
        .await
        .expect("shutdown signal should resolve after a request");
}

#[tokio::test]
async fn test_serve_stops_on_shutdown_request() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let state = AppState::new(ConfigStore::new(temp_dir.path().join("config.json")));
    let shutdown = state.shutdown.clone();
    let config = ApiConfig {
        port: 0,
        open_browser: false,
        public_dir: temp_dir.path().to_path_buf(),
        ..ApiConfig::default()
    };

    let server = tokio::spawn(ApiServer::new(config, state).serve());
    shutdown.notify_one();

    let result = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server should stop")
        .expect("server task should not panic");
    assert!(result.is_ok());
}
