use crate::config::types::{CategoryEntry, Config, ScrapeConfig, ServerConfig};
use crate::ConfigError;
use std::collections::HashSet;
use std::net::SocketAddr;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_server_config(&config.server)?;
    validate_scrape_config(&config.scrape)?;
    validate_categories(&config.categories)?;
    Ok(())
}

/// Validates server configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    if config.bind.parse::<SocketAddr>().is_err() {
        return Err(ConfigError::Validation(format!(
            "bind must be a socket address like '0.0.0.0:5000', got '{}'",
            config.bind
        )));
    }

    if config.default_limit < 1 || config.default_limit > 500 {
        return Err(ConfigError::Validation(format!(
            "default_limit must be between 1 and 500, got {}",
            config.default_limit
        )));
    }

    if config.cache_max_age > 86_400 {
        return Err(ConfigError::Validation(format!(
            "cache_max_age must be at most 86400 seconds, got {}",
            config.cache_max_age
        )));
    }

    Ok(())
}

/// Validates scrape pipeline configuration
fn validate_scrape_config(config: &ScrapeConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > 120 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and 120, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates category entries
fn validate_categories(categories: &[CategoryEntry]) -> Result<(), ConfigError> {
    if categories.is_empty() {
        return Err(ConfigError::Validation(
            "At least one category is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();

    for entry in categories {
        validate_stat_type_name(&entry.name)?;

        if !seen.insert(entry.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Duplicate category name '{}'",
                entry.name
            )));
        }

        let url = Url::parse(&entry.url).map_err(|e| {
            ConfigError::InvalidUrl(format!("Invalid URL for category '{}': {}", entry.name, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Validation(format!(
                "URL for category '{}' must use http or https, got '{}'",
                entry.name,
                url.scheme()
            )));
        }

        if entry.column.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "Category '{}' has an empty column name",
                entry.name
            )));
        }
    }

    Ok(())
}

/// Validates a stat-type identifier (it appears verbatim in API paths)
fn validate_stat_type_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::Validation(
            "Category name cannot be empty".to_string(),
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "Category name must contain only alphanumeric characters and underscores, got '{}'",
            name
        )));
    }

    Ok(())
}
