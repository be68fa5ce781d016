//! Builtin category catalog
//!
//! NFL.com player-stat pages tracked out of the box. A config file with its
//! own `[[category]]` entries replaces this catalog entirely.

use crate::config::CategoryEntry;

/// The builtin NFL.com stat category catalog.
pub fn builtin_categories() -> Vec<CategoryEntry> {
    [
        (
            "passing_yards",
            "https://www.nfl.com/stats/player-stats/category/passing/2025/REG/all/passingyards/desc",
            "YDS",
        ),
        (
            "passing_tds",
            "https://www.nfl.com/stats/player-stats/category/passing/2025/REG/all/passingtouchdowns/desc",
            "TD",
        ),
        (
            "rushing_yards",
            "https://www.nfl.com/stats/player-stats/category/rushing/2025/REG/all/rushingyards/desc",
            "YDS",
        ),
        (
            "receiving_yards",
            "https://www.nfl.com/stats/player-stats/category/receiving/2025/REG/all/receivingyards/desc",
            "YDS",
        ),
        (
            "receptions",
            "https://www.nfl.com/stats/player-stats/category/receiving/2025/REG/all/receptions/desc",
            "REC",
        ),
        (
            "field_goals_made",
            "https://www.nfl.com/stats/player-stats/category/field-goals-made/2025/REG/all/fieldgoalsmade/desc",
            "FGM",
        ),
    ]
    .into_iter()
    .map(|(name, url, column)| CategoryEntry {
        name: name.to_string(),
        url: url.to_string(),
        column: column.to_string(),
    })
    .collect()
}
