//! HTTP client for a spreadsheet published as CSV.

mod origin;

use std::time::Duration;

use reqwest::Client;

use crate::error::CatalogError;

pub use origin::extract_domain;

/// HTTP client for the published spreadsheet export.
///
/// Issues exactly one request per call with caching disabled, and maps
/// not-found and other non-2xx responses to typed errors. There is no retry:
/// a failed fetch is reported to the caller as-is.
pub struct SheetClient {
    client: Client,
}

impl SheetClient {
    /// Creates a `SheetClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the raw CSV text of the published sheet.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidSheetUrl`]: `sheet_url` is not an http(s) URL.
    /// - [`CatalogError::NotFound`]: HTTP 404 (sheet unpublished or deleted).
    /// - [`CatalogError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`CatalogError::Http`]: network, TLS or body decoding failure.
    pub async fn fetch_csv(&self, sheet_url: &str) -> Result<String, CatalogError> {
        let url = Self::sheet_url(sheet_url)?;
        let domain = extract_domain(sheet_url);

        tracing::debug!(%domain, "fetching sheet CSV");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/csv,text/plain;q=0.9,*/*;q=0.8")
            .header(reqwest::header::CACHE_CONTROL, "no-cache, no-store")
            .header(reqwest::header::PRAGMA, "no-cache")
            .send()
            .await
            .map_err(|e| CatalogError::Http(e.without_url()))?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound { host: domain });
        }

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                host: domain,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Http(e.without_url()))?;
        tracing::debug!(%domain, bytes = body.len(), "fetched sheet CSV");
        Ok(body)
    }

    /// Validates the configured sheet URL.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidSheetUrl`] if the URL does not parse or
    /// uses a scheme other than http/https.
    fn sheet_url(sheet_url: &str) -> Result<reqwest::Url, CatalogError> {
        let url = reqwest::Url::parse(sheet_url).map_err(|e| CatalogError::InvalidSheetUrl {
            host: extract_domain(sheet_url),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidSheetUrl {
                host: extract_domain(sheet_url),
                reason: format!("unsupported scheme \"{}\"", url.scheme()),
            });
        }

        Ok(url)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
