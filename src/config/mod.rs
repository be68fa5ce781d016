//! Configuration module for gridrank
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every setting has a builtin default, so the service also runs with
//! no config file at all, serving the builtin NFL.com category catalog.
//!
//! # Example
//!
//! ```no_run
//! use gridrank::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Serving on: {}", config.server.bind);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CategoryEntry, Config, InvalidStatPolicy, ScrapeConfig, ServerConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
