//! hquery - query HTML documents with CSS selectors
//!
//! Fetches a document from a URL (with browser-mimicking headers) or a
//! local file, applies a CSS selector and prints one trimmed value per
//! matched element: the element text, or a named attribute when requested.
//!
//! The library surface is [`query::execute`] and its cancellable variant;
//! the `hquery` binary wraps them behind a `get` subcommand.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod profile;
pub mod query;

pub use error::{HqueryError, Result};
pub use profile::{FingerprintProfile, CHROME_89_DESKTOP};
pub use query::{execute, execute_with_cancel, QueryRequest, Source};
