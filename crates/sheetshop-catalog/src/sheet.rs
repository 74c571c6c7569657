//! CSV decoding of the published sheet into header-keyed rows.

use std::collections::HashMap;

use crate::error::CatalogError;

/// One spreadsheet row keyed by column header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: HashMap<String, String>,
}

impl RawRow {
    /// Returns the cell under `column`, or `""` when the column is absent
    /// or the row is shorter than the header.
    #[must_use]
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map_or("", String::as_str)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RawRow::default();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

/// Parses CSV text using the first row as column headers.
///
/// Blank lines are skipped and rows with fewer or more fields than the
/// header are accepted. When a header appears twice, the first column wins.
///
/// # Errors
///
/// Returns [`CatalogError::Csv`] if the text cannot be tokenized (e.g.
/// invalid UTF-8).
pub fn parse_sheet(csv_text: &str) -> Result<Vec<RawRow>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record?;
        let mut row = RawRow::default();
        for (header, value) in headers.iter().zip(record.iter()) {
            row.cells
                .entry(header.to_owned())
                .or_insert_with(|| value.to_owned());
        }
        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), columns = headers.len(), "parsed sheet CSV");
    Ok(rows)
}
