//! Magic Slash configuration web UI server
//!
//! # Environment Variables
//!
//! - `MAGIC_SLASH_PORT`: Port to listen on (default: 3847)
//! - `MAGIC_SLASH_CONFIG`: Configuration file (default: ~/.config/magic-slash/config.json)
//! - `RUST_LOG`: Log filter (default: info)

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use magic_slash_api::{
    ApiConfig, ApiServer, AppState, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PUBLIC_DIR,
};
use magic_slash_config::ConfigStore;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Local web UI for editing the Magic Slash configuration
#[derive(Debug, Parser)]
#[command(name = "magic_slash_web", version)]
#[command(about = "Local web UI for editing the Magic Slash configuration", long_about = None)]
struct Args {
    /// Address to bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(long, env = "MAGIC_SLASH_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Configuration file to edit
    #[arg(long, env = "MAGIC_SLASH_CONFIG")]
    config: Option<PathBuf>,

    /// Directory with the client assets
    #[arg(long, default_value = DEFAULT_PUBLIC_DIR)]
    public_dir: PathBuf,

    /// Do not open the browser on start
    #[arg(long)]
    no_open: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let store = match args.config {
        Some(path) => ConfigStore::new(path),
        None => ConfigStore::at_default_location()
            .context("Failed to locate the configuration file")?,
    };
    tracing::info!(config = %store.path().display(), "Using configuration file");

    let config = ApiConfig {
        host: args.host,
        port: args.port,
        public_dir: args.public_dir,
        open_browser: !args.no_open,
    };

    ApiServer::new(config, AppState::new(store)).serve().await
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
