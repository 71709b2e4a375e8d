//! Query orchestration
//!
//! Ties source loading, HTML parsing and extraction together into a single
//! fail-fast operation, with a cancellable variant for interactive use.

use std::path::PathBuf;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{HqueryError, Result};
use crate::extract;
use crate::fetch;
use crate::profile::{FingerprintProfile, CHROME_89_DESKTOP};

/// Where the HTML document comes from. Exactly one source per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    /// Resolve a source from optional file/url inputs. Empty strings count
    /// as unset. Supplying both is rejected as ambiguous rather than
    /// silently preferring one.
    pub fn from_options(file: Option<&str>, url: Option<&str>) -> Result<Self> {
        let file = file.filter(|s| !s.is_empty());
        let url = url.filter(|s| !s.is_empty());
        match (file, url) {
            (Some(f), None) => Ok(Source::File(PathBuf::from(f))),
            (None, Some(u)) => {
                url::Url::parse(u)
                    .map_err(|e| HqueryError::config(format!("invalid url {:?}: {}", u, e)))?;
                Ok(Source::Url(u.to_string()))
            }
            (Some(_), Some(_)) => Err(HqueryError::config("both file and url provided")),
            (None, None) => Err(HqueryError::config("html source not provided")),
        }
    }
}

/// A single document query: source, CSS selector, optional attribute.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub source: Source,
    pub selector: String,
    pub attribute: Option<String>,
    profile: FingerprintProfile,
}

impl QueryRequest {
    pub fn new(source: Source, selector: impl Into<String>) -> Self {
        Self {
            source,
            selector: selector.into(),
            attribute: None,
            profile: CHROME_89_DESKTOP,
        }
    }

    /// Extract this attribute instead of element text. An empty name means
    /// no attribute extraction.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        let attribute = attribute.into();
        self.attribute = (!attribute.is_empty()).then_some(attribute);
        self
    }

    /// Fetch with a different browser fingerprint.
    pub fn with_profile(mut self, profile: FingerprintProfile) -> Self {
        self.profile = profile;
        self
    }
}

/// Run a query to completion: load the source, select, extract, and join
/// the fields with newlines. Zero matches yields an empty string. Any
/// failure aborts the whole operation; there is no partial output.
pub async fn execute(request: &QueryRequest) -> Result<String> {
    if request.selector.is_empty() {
        return Err(HqueryError::config("query not provided"));
    }
    // Compile before any I/O so a bad selector never costs a fetch.
    let selector = extract::compile_selector(&request.selector)?;

    let html = match &request.source {
        Source::File(path) => fetch::read_file(path)?,
        Source::Url(url) => {
            let client = fetch::client(&request.profile)?;
            fetch::fetch_url(&client, url).await?
        }
    };

    let document = extract::parse_document(&html);
    let fields = extract::extract(&document, &selector, request.attribute.as_deref());
    debug!(matches = fields.len(), selector = %request.selector, "query evaluated");
    Ok(fields.join("\n"))
}

/// Like [`execute`], but races the query against a cancellation token.
/// Cancellation drops the in-flight fetch and returns promptly.
pub async fn execute_with_cancel(
    request: &QueryRequest,
    cancel: CancellationToken,
) -> Result<String> {
    if cancel.is_cancelled() {
        return Err(HqueryError::Cancelled);
    }
    tokio::select! {
        result = execute(request) => result,
        _ = cancel.cancelled() => Err(HqueryError::Cancelled),
    }
}
