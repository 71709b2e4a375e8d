//! Key=value configuration files
//!
//! An optional config file supplies fallback values for the `get` flags.
//! Format: one `key=value` pair per line, `#` starts a comment, blank
//! lines are skipped. Recognised keys mirror the flag names.

use std::path::Path;

use tracing::warn;

use crate::error::{HqueryError, Result};

/// Values read from a config file. All optional; flags and environment
/// variables take precedence over these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub url: Option<String>,
    pub file: Option<String>,
    pub query: Option<String>,
    pub attr: Option<String>,
}

/// Load a config file, skipping comments and unknown keys.
pub fn load(path: &Path) -> Result<FileConfig> {
    let contents = std::fs::read_to_string(path).map_err(|source| HqueryError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse(&contents))
}

fn parse(contents: &str) -> FileConfig {
    let mut config = FileConfig::default();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Values may themselves contain '=', so split only once
        let Some((key, value)) = line.split_once('=') else {
            warn!(line = %line, "skipping malformed config line");
            continue;
        };
        let value = value.trim().to_string();
        match key.trim() {
            "url" => config.url = Some(value),
            "file" => config.file = Some(value),
            "query" => config.query = Some(value),
            "attr" => config.attr = Some(value),
            other => warn!(key = %other, "ignoring unknown config key"),
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_pairs() {
        let config = parse("url=http://example.com\nquery=li\n");
        assert_eq!(
            config,
            FileConfig {
                url: Some("http://example.com".to_string()),
                file: None,
                query: Some("li".to_string()),
                attr: None,
            }
        );
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let config = parse("# fetch defaults\n\n  \nattr=href\n");
        assert_eq!(config.attr, Some("href".to_string()));
        assert_eq!(config.url, None);
    }

    #[test]
    fn test_parse_value_may_contain_equals() {
        let config = parse("query=a[href=\"/x\"]");
        assert_eq!(config.query, Some("a[href=\"/x\"]".to_string()));
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let config = parse("timeout=5\nquery=li");
        assert_eq!(config.query, Some("li".to_string()));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/hquery.conf")).unwrap_err();
        assert!(matches!(err, HqueryError::Io { .. }));
    }
}
