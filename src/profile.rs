//! Browser fingerprint profiles
//!
//! A profile is a named, fixed set of request headers that makes an
//! automated fetch look like a specific browser. The fetch logic takes a
//! profile as input, so adding a new browser means adding a constant here.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Fixed set of request headers mimicking one browser/client.
#[derive(Debug, Clone, Copy)]
pub struct FingerprintProfile {
    pub name: &'static str,
    /// Header names must be lowercase, values visible ASCII.
    pub headers: &'static [(&'static str, &'static str)],
}

impl FingerprintProfile {
    /// Build the headers as a `HeaderMap` for installing on an HTTP client.
    pub fn header_map(&self) -> HeaderMap {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for &(name, value) in self.headers {
            map.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }
        map
    }
}

/// Desktop Chrome 89 on Windows 10, Spanish locale.
pub const CHROME_89_DESKTOP: FingerprintProfile = FingerprintProfile {
    name: "chrome-89-desktop",
    headers: &[
        ("cache-control", "max-age=0"),
        ("rtt", "150"),
        ("downlink", "10"),
        ("ect", "4g"),
        (
            "sec-ch-ua",
            r#""Google Chrome";v="89", "Chromium";v="89", ";Not A Brand";v="99""#,
        ),
        ("sec-ch-ua-mobile", "?0"),
        ("upgrade-insecure-requests", "1"),
        (
            "user-agent",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/89.0.4389.128 Safari/537.36",
        ),
        (
            "accept-language",
            "es-ES,es;q=0.9,en-US;q=0.8,en;q=0.7,eu;q=0.6,fr;q=0.5",
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_map_exact_values() {
        let map = CHROME_89_DESKTOP.header_map();
        assert_eq!(map.len(), 9);
        assert_eq!(
            map.get("user-agent").unwrap(),
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/89.0.4389.128 Safari/537.36"
        );
        assert_eq!(map.get("cache-control").unwrap(), "max-age=0");
        assert_eq!(map.get("sec-ch-ua-mobile").unwrap(), "?0");
    }
}
