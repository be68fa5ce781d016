//! Leaderboard ranking
//!
//! Sorts extracted records by stat, highest first, and truncates to the
//! requested size. The sort is stable, so players with equal stats keep
//! their table order.

use super::extract::PlayerRecord;

/// Ranks records by stat value, highest first
///
/// Ties keep their extraction order. A `limit` larger than the record count
/// returns everything; a limit of zero returns an empty leaderboard.
///
/// # Arguments
///
/// * `records` - The extracted records, in table order
/// * `limit` - Maximum number of entries to keep
///
/// # Returns
///
/// The top `limit` records by stat value
pub fn rank(mut records: Vec<PlayerRecord>, limit: usize) -> Vec<PlayerRecord> {
    // Stats are always finite, so total_cmp agrees with the usual ordering.
    records.sort_by(|a, b| b.stat.total_cmp(&a.stat));
    records.truncate(limit);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, stat: f64) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            team: "DAL".to_string(),
            stat,
        }
    }

    #[test]
    fn test_rank_descending() {
        let records = vec![record("low", 10.0), record("high", 30.0), record("mid", 20.0)];

        let ranked = rank(records, 10);

        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_rank_truncates_to_limit() {
        let records = vec![
            record("a", 4.0),
            record("b", 3.0),
            record("c", 2.0),
            record("d", 1.0),
        ];

        let ranked = rank(records, 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "a");
        assert_eq!(ranked[1].name, "b");
    }

    #[test]
    fn test_rank_limit_beyond_len_returns_all() {
        let records = vec![record("a", 1.0), record("b", 2.0)];

        let ranked = rank(records, 20);

        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_rank_ties_keep_extraction_order() {
        let records = vec![
            record("first", 50.0),
            record("second", 50.0),
            record("third", 50.0),
        ];

        let ranked = rank(records, 10);

        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_rank_ties_stable_under_interleaving() {
        let records = vec![
            record("a", 10.0),
            record("b", 99.0),
            record("c", 10.0),
        ];

        let ranked = rank(records, 10);

        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_rank_tie_survives_truncation_in_order() {
        let records = vec![
            record("a", 10.0),
            record("b", 20.0),
            record("c", 20.0),
            record("d", 5.0),
        ];

        let ranked = rank(records, 3);

        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_rank_zero_limit() {
        let records = vec![record("a", 1.0)];

        assert!(rank(records, 0).is_empty());
    }

    #[test]
    fn test_rank_empty_input() {
        assert!(rank(Vec::new(), 5).is_empty());
    }
}
