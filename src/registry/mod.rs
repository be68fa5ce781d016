//! Stat category registry
//!
//! Immutable mapping from stat-type identifiers to the pages they are
//! scraped from. Built once at process start from configuration (or the
//! builtin catalog) and shared read-only across requests.

mod defaults;

pub use defaults::builtin_categories;

use crate::config::CategoryEntry;
use std::collections::HashMap;

/// Source page and expected statistic column for one stat category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    /// Page to fetch
    pub url: String,

    /// Header text of the statistic column on that page
    pub column: String,
}

/// Immutable stat-type to source mapping
#[derive(Debug, Clone)]
pub struct Registry {
    specs: HashMap<String, SourceSpec>,
}

impl Registry {
    /// Builds a registry from category entries.
    pub fn from_entries(entries: &[CategoryEntry]) -> Self {
        let specs = entries
            .iter()
            .map(|entry| {
                (
                    entry.name.clone(),
                    SourceSpec {
                        url: entry.url.clone(),
                        column: entry.column.clone(),
                    },
                )
            })
            .collect();

        Self { specs }
    }

    /// Looks up the source spec for a stat type.
    ///
    /// Returns None for identifiers the catalog does not know; the caller
    /// distinguishes this from upstream-data failures when shaping the
    /// response.
    pub fn resolve(&self, stat_type: &str) -> Option<&SourceSpec> {
        self.specs.get(stat_type)
    }

    /// All known stat-type identifiers, sorted for stable listings.
    pub fn stat_types(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.specs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered categories.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// True when no categories are registered.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, url: &str, column: &str) -> CategoryEntry {
        CategoryEntry {
            name: name.to_string(),
            url: url.to_string(),
            column: column.to_string(),
        }
    }

    #[test]
    fn test_resolve_known_stat_type() {
        let registry = Registry::from_entries(&[entry(
            "passing_yards",
            "https://stats.example.com/passing",
            "YDS",
        )]);

        let spec = registry.resolve("passing_yards").unwrap();
        assert_eq!(spec.url, "https://stats.example.com/passing");
        assert_eq!(spec.column, "YDS");
    }

    #[test]
    fn test_resolve_unknown_stat_type() {
        let registry = Registry::from_entries(&[]);
        assert!(registry.resolve("passing_yards").is_none());
    }

    #[test]
    fn test_stat_types_sorted() {
        let registry = Registry::from_entries(&[
            entry("rushing_yards", "https://a.example.com", "YDS"),
            entry("passing_tds", "https://b.example.com", "TD"),
            entry("receptions", "https://c.example.com", "REC"),
        ]);

        assert_eq!(
            registry.stat_types(),
            vec!["passing_tds", "receptions", "rushing_yards"]
        );
    }

    #[test]
    fn test_builtin_catalog_registers() {
        let registry = Registry::from_entries(&builtin_categories());

        assert_eq!(registry.len(), 6);
        for name in [
            "passing_yards",
            "passing_tds",
            "rushing_yards",
            "receiving_yards",
            "receptions",
            "field_goals_made",
        ] {
            assert!(registry.resolve(name).is_some(), "missing {}", name);
        }
    }
}
