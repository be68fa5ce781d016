//! Player record extraction
//!
//! Turns table rows into typed player records: fixed positional cells for
//! name and team, the resolved column for the stat, and a coercion step
//! that strips thousands separators. Rows that cannot produce a usable
//! record are dropped, never erred.

use crate::config::InvalidStatPolicy;
use serde::Serialize;
use tracing::debug;

/// Positional index of the player name cell
pub const NAME_INDEX: usize = 1;

/// Positional index of the team cell
pub const TEAM_INDEX: usize = 2;

/// One extracted leaderboard entry
///
/// `stat` is always finite; rows whose stat text does not coerce to a
/// finite number either carry the default or are dropped, per policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecord {
    /// Player display name
    pub name: String,

    /// Team abbreviation as shown in the table
    pub team: String,

    /// The ranked stat value
    pub stat: f64,
}

/// Outcome of coercing one stat cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    /// The cell text parsed as a finite number
    Parsed(f64),

    /// The cell text was malformed; the default stands in for it
    Defaulted(f64),
}

impl StatValue {
    /// Returns the numeric value regardless of origin
    pub fn value(&self) -> f64 {
        match self {
            StatValue::Parsed(value) => *value,
            StatValue::Defaulted(value) => *value,
        }
    }

    /// Returns true if the cell text failed to parse
    pub fn is_defaulted(&self) -> bool {
        matches!(self, StatValue::Defaulted(_))
    }
}

/// Coerces a stat cell to a number
///
/// Strips commas (thousands separators) and surrounding whitespace before
/// parsing. Anything that does not parse to a finite float is tagged as
/// defaulted with 0.0; the caller's policy decides whether that record is
/// kept or dropped. Tagging rather than erroring keeps one bad cell from
/// discarding the rest of the table.
///
/// # Arguments
///
/// * `raw` - The stat cell text
///
/// # Returns
///
/// The coerced value, tagged with whether the text parsed
pub fn coerce_stat(raw: &str) -> StatValue {
    let cleaned = raw.replace(',', "");

    match cleaned.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => StatValue::Parsed(value),
        _ => StatValue::Defaulted(0.0),
    }
}

/// Extracts player records from table rows
///
/// Each row must reach past the stat column and carry non-empty name and
/// team cells; rows that fail either check are skipped. Malformed stat
/// cells follow `policy`: kept at 0.0 or dropped.
///
/// # Arguments
///
/// * `rows` - The table's data rows
/// * `stat_index` - The resolved stat column index
/// * `policy` - What to do with rows whose stat cell is malformed
///
/// # Returns
///
/// The extracted records, in row order
pub fn extract_records(
    rows: &[Vec<String>],
    stat_index: usize,
    policy: InvalidStatPolicy,
) -> Vec<PlayerRecord> {
    let min_len = stat_index.max(TEAM_INDEX) + 1;
    let mut records = Vec::new();

    for row in rows {
        if row.len() < min_len {
            debug!(cells = row.len(), "Skipping short row");
            continue;
        }

        let name = row[NAME_INDEX].as_str();
        let team = row[TEAM_INDEX].as_str();

        if name.is_empty() || team.is_empty() {
            debug!("Skipping row with empty name or team");
            continue;
        }

        let stat = coerce_stat(&row[stat_index]);

        if stat.is_defaulted() {
            match policy {
                InvalidStatPolicy::Zero => {
                    debug!(player = name, raw = %row[stat_index], "Malformed stat, defaulting to 0");
                }
                InvalidStatPolicy::Drop => {
                    debug!(player = name, raw = %row[stat_index], "Malformed stat, dropping row");
                    continue;
                }
            }
        }

        records.push(PlayerRecord {
            name: name.to_string(),
            team: team.to_string(),
            stat: stat.value(),
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    #[test]
    fn test_coerce_plain_number() {
        assert_eq!(coerce_stat("987"), StatValue::Parsed(987.0));
    }

    #[test]
    fn test_coerce_strips_commas() {
        assert_eq!(coerce_stat("1,234"), StatValue::Parsed(1234.0));
        assert_eq!(coerce_stat("1,234,567.5"), StatValue::Parsed(1234567.5));
    }

    #[test]
    fn test_coerce_trims_whitespace() {
        assert_eq!(coerce_stat(" 42.5 "), StatValue::Parsed(42.5));
    }

    #[test]
    fn test_coerce_malformed_defaults_to_zero() {
        assert_eq!(coerce_stat("--"), StatValue::Defaulted(0.0));
        assert_eq!(coerce_stat("—"), StatValue::Defaulted(0.0));
        assert_eq!(coerce_stat(""), StatValue::Defaulted(0.0));
        assert_eq!(coerce_stat("N/A"), StatValue::Defaulted(0.0));
    }

    #[test]
    fn test_coerce_rejects_non_finite() {
        // "inf" and "NaN" parse as floats but are not usable stat values.
        assert!(coerce_stat("inf").is_defaulted());
        assert!(coerce_stat("NaN").is_defaulted());
    }

    #[test]
    fn test_extract_basic_rows() {
        let rows = vec![
            row(&["1", "Alice Smith", "DAL", "16", "1,234"]),
            row(&["2", "Bob Jones", "GB", "15", "987"]),
        ];

        let records = extract_records(&rows, 4, InvalidStatPolicy::Zero);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Alice Smith");
        assert_eq!(records[0].team, "DAL");
        assert_eq!(records[0].stat, 1234.0);
        assert_eq!(records[1].stat, 987.0);
    }

    #[test]
    fn test_extract_skips_short_rows() {
        let rows = vec![
            row(&["Season totals"]),
            row(&["1", "Alice Smith", "DAL", "16", "1,234"]),
        ];

        let records = extract_records(&rows, 4, InvalidStatPolicy::Zero);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Alice Smith");
    }

    #[test]
    fn test_extract_skips_empty_name_or_team() {
        let rows = vec![
            row(&["1", "", "DAL", "16", "100"]),
            row(&["2", "Bob Jones", "", "15", "90"]),
            row(&["3", "Cara Lee", "SF", "15", "80"]),
        ];

        let records = extract_records(&rows, 4, InvalidStatPolicy::Zero);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Cara Lee");
    }

    #[test]
    fn test_extract_zero_policy_keeps_malformed_as_zero() {
        let rows = vec![
            row(&["1", "Alice Smith", "DAL", "16", "--"]),
            row(&["2", "Bob Jones", "GB", "15", "987"]),
        ];

        let records = extract_records(&rows, 4, InvalidStatPolicy::Zero);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].stat, 0.0);
        assert_eq!(records[1].stat, 987.0);
    }

    #[test]
    fn test_extract_drop_policy_removes_malformed() {
        let rows = vec![
            row(&["1", "Alice Smith", "DAL", "16", "--"]),
            row(&["2", "Bob Jones", "GB", "15", "987"]),
        ];

        let records = extract_records(&rows, 4, InvalidStatPolicy::Drop);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Bob Jones");
    }

    #[test]
    fn test_extract_stat_from_resolved_index() {
        let rows = vec![row(&["1", "Alice Smith", "DAL", "12", "1,234"])];

        let records = extract_records(&rows, 3, InvalidStatPolicy::Zero);

        assert_eq!(records[0].stat, 12.0);
    }

    #[test]
    fn test_extract_row_exactly_reaching_stat_index() {
        // Five cells with stat index 4: just long enough.
        let rows = vec![row(&["1", "Alice Smith", "DAL", "16", "9"])];

        let records = extract_records(&rows, 4, InvalidStatPolicy::Zero);

        assert_eq!(records.len(), 1);
    }
}
