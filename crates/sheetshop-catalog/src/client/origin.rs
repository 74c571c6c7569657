/// Extracts the hostname from a sheet URL for use in log fields.
///
/// Published sheet URLs carry an unguessable document key in the path, so
/// only the host is ever logged. Falls back to `"unknown"` if parsing fails.
#[must_use]
pub fn extract_domain(sheet_url: &str) -> String {
    reqwest::Url::parse(sheet_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| "unknown".to_owned())
}
