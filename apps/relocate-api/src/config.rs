//! Server configuration
//!
//! Every option can come from the command line or the environment
//! (a `.env` file is loaded first by `main`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;

#[derive(Parser, Debug, Clone)]
#[command(name = "relocate-api")]
#[command(version, about = "Relocate Me backend: relocation timeline and task tracking API")]
pub struct Config {
    /// Host address to bind to
    #[arg(long, env = "RELOCATE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "8001")]
    pub port: u16,

    /// SQLite connection string, defaults to the platform data directory
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Bind the listener. The host may be a name such as `localhost`.
    pub async fn bind(&self) -> Result<TcpListener> {
        TcpListener::bind((self.host.as_str(), self.port))
            .await
            .with_context(|| format!("Could not bind {}:{}", self.host, self.port))
    }

    pub fn database_url(&self) -> String {
        self.database_url.clone().unwrap_or_else(default_database_url)
    }
}

fn default_database_url() -> String {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("relocate-api");
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        tracing::warn!("Could not create {}: {}", data_dir.display(), e);
    }
    format!("sqlite:{}/relocate.db?mode=rwc", data_dir.display())
}

/// Platform-specific data directory
mod dirs {
    use std::path::PathBuf;

    pub fn data_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(target_os = "windows")]
        {
            std::env::var("APPDATA").ok().map(PathBuf::from)
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }
}
