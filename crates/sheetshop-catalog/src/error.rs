use thiserror::Error;

/// Errors from fetching and parsing the published sheet.
///
/// Published sheet URLs carry the document key, so variants only record the
/// host and messages never contain the full URL.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("sheet not found on {host}")]
    NotFound { host: String },

    #[error("unexpected HTTP status {status} from {host}")]
    UnexpectedStatus { status: u16, host: String },

    #[error("invalid sheet URL (host {host}): {reason}")]
    InvalidSheetUrl { host: String, reason: String },

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
}
