use serde::Deserialize;

/// Main configuration structure for gridrank
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub scrape: ScrapeConfig,

    /// Stat category catalog; the builtin NFL.com catalog applies when a
    /// config file declares no `[[category]]` entries
    #[serde(default, rename = "category")]
    pub categories: Vec<CategoryEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            scrape: ScrapeConfig::default(),
            categories: crate::registry::builtin_categories(),
        }
    }
}

/// Query API server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind: String,

    /// Result count served when a request carries no `n` parameter
    #[serde(rename = "default-limit")]
    pub default_limit: usize,

    /// `Cache-Control: max-age` advertised on leaderboard responses, seconds
    #[serde(rename = "cache-max-age")]
    pub cache_max_age: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:5000".to_string(),
            default_limit: 20,
            cache_max_age: 300,
        }
    }
}

/// Scrape pipeline configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Total request timeout for one page fetch, seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Policy for rows whose stat text fails numeric coercion
    #[serde(rename = "invalid-stat")]
    pub invalid_stat: InvalidStatPolicy,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            invalid_stat: InvalidStatPolicy::Zero,
        }
    }
}

/// Policy for rows whose stat cell fails numeric coercion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidStatPolicy {
    /// Keep the row with 0.0 standing in for the statistic
    Zero,

    /// Exclude the row from the leaderboard entirely
    Drop,
}

impl Default for InvalidStatPolicy {
    fn default() -> Self {
        Self::Zero
    }
}

/// Stat category entry mapping a stat-type identifier to its source page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryEntry {
    /// Stat-type identifier used in API paths (e.g. "passing_yards")
    pub name: String,

    /// Page to fetch for this category
    pub url: String,

    /// Header text of the statistic column on that page
    pub column: String,
}
