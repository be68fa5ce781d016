//! API response payloads
//!
//! The JSON bodies the server emits, as serde structs so both the handlers
//! and the tests work with typed values instead of hand-built strings.

use crate::scrape::PlayerRecord;
use serde::Serialize;

/// Leaderboard response for `/api/<stat_type>`
///
/// Always answered with HTTP 200; `status` distinguishes a populated
/// leaderboard (`"ok"`) from an empty one (`"no_data"`), whatever the
/// reason for the emptiness.
#[derive(Debug, Serialize)]
pub struct StatPayload {
    /// `"ok"` when players is non-empty, `"no_data"` otherwise
    pub status: &'static str,

    /// The requested stat type
    pub stat_type: String,

    /// Number of players in the leaderboard
    pub results: usize,

    /// Ranked players, highest stat first
    pub players: Vec<PlayerRecord>,
}

impl StatPayload {
    /// Builds the payload for a finished pipeline run
    pub fn from_players(stat_type: &str, players: Vec<PlayerRecord>) -> Self {
        StatPayload {
            status: if players.is_empty() { "no_data" } else { "ok" },
            stat_type: stat_type.to_string(),
            results: players.len(),
            players,
        }
    }
}

/// Index response for `/`
#[derive(Debug, Serialize)]
pub struct IndexPayload {
    pub status: &'static str,

    /// Service banner
    pub message: &'static str,

    /// Registered stat types, sorted
    pub available_stats: Vec<String>,

    /// Query pattern hint, e.g. `/api/<stat_type>?n=20`
    pub usage: String,
}

impl IndexPayload {
    /// Builds the index listing from the registered stat types
    pub fn new(stat_types: Vec<String>, default_limit: usize) -> Self {
        IndexPayload {
            status: "ok",
            message: "gridrank stat leaderboard API",
            available_stats: stat_types,
            usage: format!("/api/<stat_type>?n={}", default_limit),
        }
    }
}

/// Error response body for 4xx/5xx answers
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub status: &'static str,

    /// Human-readable description of the failure
    pub message: String,
}

impl ErrorPayload {
    /// 404 body for a stat type the registry does not know
    pub fn unknown_stat_type(stat_type: &str) -> Self {
        ErrorPayload {
            status: "error",
            message: format!("Stat type '{}' not found.", stat_type),
        }
    }

    /// 400 body for a rejected `n` parameter
    pub fn invalid_limit() -> Self {
        ErrorPayload {
            status: "error",
            message: "Query parameter 'n' must not be negative.".to_string(),
        }
    }

    /// Generic body for the remaining error statuses
    pub fn plain(message: &str) -> Self {
        ErrorPayload {
            status: "error",
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn player(name: &str, stat: f64) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            team: "KC".to_string(),
            stat,
        }
    }

    #[test]
    fn test_stat_payload_ok() {
        let payload = StatPayload::from_players("passing_yards", vec![player("Alice", 1234.0)]);

        assert_eq!(payload.status, "ok");
        assert_eq!(payload.results, 1);

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "ok",
                "stat_type": "passing_yards",
                "results": 1,
                "players": [{"name": "Alice", "team": "KC", "stat": 1234.0}],
            })
        );
    }

    #[test]
    fn test_stat_payload_no_data_when_empty() {
        let payload = StatPayload::from_players("receptions", Vec::new());

        assert_eq!(payload.status, "no_data");
        assert_eq!(payload.results, 0);
        assert!(payload.players.is_empty());
    }

    #[test]
    fn test_index_payload_shape() {
        let payload = IndexPayload::new(
            vec!["passing_yards".to_string(), "receptions".to_string()],
            20,
        );

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["available_stats"][1], "receptions");
        assert_eq!(value["usage"], "/api/<stat_type>?n=20");
    }

    #[test]
    fn test_unknown_stat_type_message() {
        let payload = ErrorPayload::unknown_stat_type("sacks");

        assert_eq!(payload.status, "error");
        assert_eq!(payload.message, "Stat type 'sacks' not found.");
    }
}
