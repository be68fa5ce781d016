//! Gridrank: ranked leaderboards scraped from hosted HTML stat tables
//!
//! This crate fetches loosely-structured stat pages (NFL.com player stats by
//! default), locates the data table, resolves the wanted statistic column,
//! extracts player records, and serves size-bounded ranked leaderboards over
//! a small JSON query API.

pub mod config;
pub mod registry;
pub mod scrape;
pub mod server;

use thiserror::Error;

/// Main error type for gridrank operations
#[derive(Debug, Error)]
pub enum GridrankError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Upstream status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for gridrank operations
pub type Result<T> = std::result::Result<T, GridrankError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, InvalidStatPolicy};
pub use registry::{Registry, SourceSpec};
pub use scrape::{scrape_leaderboard, PlayerRecord, ScrapeOutcome};
