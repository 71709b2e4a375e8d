//! Document retrieval
//!
//! Resolves the raw HTML for a query, either by reading a local file or by
//! issuing a single HTTP GET with a browser fingerprint profile applied.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{HqueryError, Result};
use crate::profile::FingerprintProfile;

/// Total request timeout, connect included.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Read the document from a local file.
pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| HqueryError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Build the HTTP client used for a single fetch.
///
/// The profile headers are installed as default headers so every request
/// carries the full fingerprint; redirect handling stays at the client
/// default.
pub fn client(profile: &FingerprintProfile) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .default_headers(profile.header_map())
        .build()
        .map_err(HqueryError::Network)
}

/// Fetch a URL and return the response body.
///
/// Anything other than status 200 is a hard error carrying the status text
/// verbatim; the body is not read in that case.
pub async fn fetch_url(client: &reqwest::Client, url: &str) -> Result<String> {
    debug!(url = %url, "fetching document");
    let response = client.get(url).send().await.map_err(|e| {
        warn!(url = %url, error = %e, "get request failed");
        HqueryError::Network(e)
    })?;

    let status = response.status();
    if status.as_u16() != 200 {
        warn!(url = %url, status = %status, "unexpected status");
        return Err(HqueryError::HttpStatus {
            status: status.to_string(),
        });
    }

    let body = response.text().await.map_err(HqueryError::Parse)?;
    debug!(url = %url, bytes = body.len(), "document fetched");
    Ok(body)
}
