//! Shared HTTP helpers for provider clients.
//!
//! Centralizes status-code checks and query-string construction so the provider
//! modules stay focused on request parameters and response mapping.

use crate::error::SourceError;

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** → [`SourceError::RateLimited`] with `Retry-After`
///   parsing (falls back to 60 s if absent or unparseable). No retry is attempted;
///   the value is only reported.
/// - **Non-success status** → [`SourceError::Api`] with status code and body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, SourceError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(SourceError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        return Err(SourceError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// Append percent-encoded query parameters to `base`.
pub fn with_query(base: &str, params: &[(&str, &str)]) -> String {
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}{query}")
}
