//! Stat column resolution
//!
//! Each source spec names the header of the column holding the ranked stat.
//! Header layouts drift upstream, so resolution falls back to a fixed
//! positional index when the named header is missing, and the outcome says
//! which path was taken.

/// Positional index used when the named stat column is not in the headers
///
/// Matches the layout the built-in sources share: rank, player, team,
/// games, stat.
pub const FALLBACK_STAT_INDEX: usize = 4;

/// How the stat column index was determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnResolution {
    /// The configured header matched exactly at this index
    Exact(usize),

    /// No header matched; the positional fallback index is in effect
    Fallback(usize),
}

impl ColumnResolution {
    /// Returns the resolved cell index regardless of how it was found
    pub fn index(&self) -> usize {
        match self {
            ColumnResolution::Exact(index) => *index,
            ColumnResolution::Fallback(index) => *index,
        }
    }

    /// Returns true if resolution fell back to the positional index
    pub fn is_fallback(&self) -> bool {
        matches!(self, ColumnResolution::Fallback(_))
    }
}

/// Resolves the stat column within a header row
///
/// Comparison is exact and case-sensitive after trimming each header; the
/// header cells are already trimmed at extraction, so in practice this is a
/// straight equality scan. The first match wins. When nothing matches
/// (including the no-`thead` case, where `headers` is empty) the fixed
/// fallback index is returned, tagged so the caller can log the degradation.
///
/// # Arguments
///
/// * `headers` - The table's header labels, in document order
/// * `column` - The configured stat column header
///
/// # Returns
///
/// The resolved index, tagged with how it was found
pub fn resolve_column(headers: &[String], column: &str) -> ColumnResolution {
    let wanted = column.trim();

    match headers.iter().position(|header| header.trim() == wanted) {
        Some(index) => ColumnResolution::Exact(index),
        None => ColumnResolution::Fallback(FALLBACK_STAT_INDEX),
    }
}
