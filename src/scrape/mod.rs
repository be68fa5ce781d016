//! Leaderboard scrape pipeline
//!
//! This module implements the fetch-to-ranking pipeline:
//! - `fetcher`: HTTP client construction and page fetching
//! - `table`: locating the first stat table and lifting it into a grid
//! - `columns`: resolving the configured stat column, with fallback
//! - `extract`: turning rows into typed player records
//! - `rank`: stable descending sort and truncation
//!
//! `scrape_leaderboard` chains the steps for one source spec. Upstream
//! failures and missing tables degrade to an empty leaderboard rather than
//! propagating; the outcome is tagged so callers can still tell the cases
//! apart.

pub mod columns;
pub mod extract;
pub mod fetcher;
pub mod rank;
pub mod table;

pub use columns::{resolve_column, ColumnResolution, FALLBACK_STAT_INDEX};
pub use extract::{coerce_stat, extract_records, PlayerRecord, StatValue};
pub use fetcher::{build_http_client, fetch_document, RawDocument};
pub use rank::rank;
pub use table::{locate_table, StatsTable};

use crate::config::InvalidStatPolicy;
use crate::registry::SourceSpec;
use crate::GridrankError;
use reqwest::Client;
use tracing::{debug, info, warn};

/// Result of one leaderboard scrape
///
/// Only `Ranked` carries data. The other variants all surface to clients as
/// an empty leaderboard, but stay distinct here for logging and tests.
#[derive(Debug)]
pub enum ScrapeOutcome {
    /// The pipeline produced a ranked leaderboard (possibly empty)
    Ranked(Vec<PlayerRecord>),

    /// The page fetched but contained no table
    NoTable,

    /// The fetch itself failed
    FetchFailed(GridrankError),
}

impl ScrapeOutcome {
    /// Unwraps the outcome into its players, empty for degraded cases
    pub fn into_players(self) -> Vec<PlayerRecord> {
        match self {
            ScrapeOutcome::Ranked(players) => players,
            ScrapeOutcome::NoTable | ScrapeOutcome::FetchFailed(_) => Vec::new(),
        }
    }

    /// Returns true if the pipeline ran to completion
    pub fn is_ranked(&self) -> bool {
        matches!(self, ScrapeOutcome::Ranked(_))
    }
}

/// Scrapes and ranks one leaderboard
///
/// Fetches the spec's page, locates the first stat table, resolves the stat
/// column, extracts records, and ranks them. Fetch failures and missing
/// tables are logged and folded into the outcome instead of erroring;
/// a request for a category whose source is down still gets a well-formed
/// (empty) answer.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `spec` - Source page URL and stat column for the category
/// * `limit` - Maximum number of leaderboard entries
/// * `policy` - Malformed-stat handling
///
/// # Returns
///
/// The tagged outcome of the pipeline
pub async fn scrape_leaderboard(
    client: &Client,
    spec: &SourceSpec,
    limit: usize,
    policy: InvalidStatPolicy,
) -> ScrapeOutcome {
    let document = match fetch_document(client, &spec.url).await {
        Ok(document) => document,
        Err(error) => {
            warn!(url = %spec.url, %error, "Fetch failed");
            return ScrapeOutcome::FetchFailed(error);
        }
    };

    debug!(
        url = %document.final_url,
        status = document.status,
        bytes = document.body.len(),
        "Fetched source page"
    );

    let stats_table = match locate_table(&document.body) {
        Some(stats_table) => stats_table,
        None => {
            warn!(url = %spec.url, "No stat table found in page");
            return ScrapeOutcome::NoTable;
        }
    };

    let resolution = resolve_column(&stats_table.headers, &spec.column);
    if let ColumnResolution::Fallback(index) = resolution {
        warn!(
            "Stat column '{}' not found at {}, using fallback index {}",
            spec.column, spec.url, index
        );
    }

    let records = extract_records(&stats_table.rows, resolution.index(), policy);
    let players = rank(records, limit);

    info!(
        url = %spec.url,
        column = %spec.column,
        fallback = resolution.is_fallback(),
        players = players.len(),
        "Scraped leaderboard"
    );

    ScrapeOutcome::Ranked(players)
}
