//! Typed errors for document queries
//!
//! Uses `thiserror` so callers can match on the failure kind; the CLI
//! renders the message and exits non-zero.

use thiserror::Error;

/// Errors that can occur while resolving, fetching or querying a document.
#[derive(Debug, Error)]
pub enum HqueryError {
    /// Bad or missing inputs, detected before any I/O starts
    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    /// Local file could not be opened or read
    #[error("couldn't open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Transport-level HTTP failure (DNS, connect, TLS, timeout)
    #[error("get request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// Response arrived with a status other than 200
    #[error("invalid status code: {status}")]
    HttpStatus { status: String },

    /// Response body could not be read into a document
    #[error("couldn't read document: {0}")]
    Parse(#[source] reqwest::Error),

    /// CSS selector did not parse
    #[error("invalid selector {selector:?}: {reason}")]
    QuerySyntax { selector: String, reason: String },

    /// Operation aborted by the cancellation token
    #[error("operation cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, HqueryError>;

impl HqueryError {
    /// Shorthand for configuration failures.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }
}
