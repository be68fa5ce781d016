//! Stat table location and cell extraction
//!
//! Finds the first `<table>` in a fetched document and lifts it into an
//! owned grid of trimmed strings. Everything downstream (column resolution,
//! record extraction) works on the grid and never touches the DOM again.

use scraper::{ElementRef, Html, Selector};

/// A stat table lifted out of the document
///
/// Headers come from `thead th` cells; rows from `tbody tr`. The parser
/// inserts an implicit `tbody` around bare `<tr>` children, so tables
/// written without one still yield rows.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsTable {
    /// Column header labels, in document order
    pub headers: Vec<String>,

    /// Data rows, each a vector of cell texts
    pub rows: Vec<Vec<String>>,
}

impl StatsTable {
    /// Returns true if the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Locates the first stat table in a document
///
/// Returns `None` when the document contains no `<table>` element at all.
/// A table with no `thead` yields empty headers, and a table with no rows
/// yields an empty grid; both are still `Some` so the caller can tell
/// "table missing" apart from "table empty".
///
/// # Arguments
///
/// * `body` - The raw HTML of the fetched page
///
/// # Returns
///
/// * `Some(StatsTable)` - The first table, lifted into owned strings
/// * `None` - No table present in the document
pub fn locate_table(body: &str) -> Option<StatsTable> {
    let document = Html::parse_document(body);

    let table_selector = Selector::parse("table").ok()?;
    let table = document.select(&table_selector).next()?;

    Some(StatsTable {
        headers: extract_headers(&table),
        rows: extract_rows(&table),
    })
}

/// Extracts the header labels from `thead th` cells
fn extract_headers(table: &ElementRef) -> Vec<String> {
    let header_selector = match Selector::parse("thead th") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    table
        .select(&header_selector)
        .map(|cell| cell_text(&cell))
        .collect()
}

/// Extracts the data rows from `tbody tr` elements
fn extract_rows(table: &ElementRef) -> Vec<Vec<String>> {
    let row_selector = match Selector::parse("tbody tr") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    let cell_selector = match Selector::parse("td") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    table
        .select(&row_selector)
        .map(|row| {
            row.select(&cell_selector)
                .map(|cell| cell_text(&cell))
                .collect()
        })
        .collect()
}

/// Collects and trims the text content of a cell
fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}
