// src/core/net.rs
// Single blocking HTTP(S) GET. No retries: any failure ends the run.

use std::time::Duration;

use reqwest::{Url, blocking::Client};
use tracing::{debug, info};

use crate::config::consts::USER_AGENT;
use crate::error::ScrapeError;

/// Fetch `url` and return the response body as text.
///
/// Sends a browser-like `User-Agent` and gives up after `timeout`.
/// Transport errors, timeouts and non-2xx statuses all surface as
/// network errors.
pub fn http_get(url: &str, timeout: Duration) -> Result<String, ScrapeError> {
    let parsed = parse_url(url)?;

    let network = |source: reqwest::Error| ScrapeError::Network { url: s!(url), source };

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(network)?;

    info!("GET {parsed}");
    let resp = client.get(parsed).send().map_err(network)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::HttpStatus { url: s!(url), status });
    }

    let body = resp.text().map_err(network)?;
    debug!("received {} bytes", body.len());
    Ok(body)
}

/// Accept only absolute http/https URLs.
pub fn parse_url(url: &str) -> Result<Url, ScrapeError> {
    let parsed = Url::parse(url.trim()).map_err(|_| ScrapeError::InvalidUrl(s!(url)))?;
    match parsed.scheme() {
        "http" | "https" if parsed.has_host() => Ok(parsed),
        _ => Err(ScrapeError::InvalidUrl(s!(url))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_relative_and_non_http_urls() {
        for bad in ["rifle_ballistics_table2.htm", "ftp://example.com/x", "", "mailto:a@b.c"] {
            let err = parse_url(bad).unwrap_err();
            assert!(matches!(err, ScrapeError::InvalidUrl(_)), "{bad}");
            assert!(err.is_network());
        }
    }

    #[test]
    fn accepts_https() {
        let u = parse_url(" https://chuckhawks.com/rifle_ballistics_table2.htm ").unwrap();
        assert_eq!(u.host_str(), Some("chuckhawks.com"));
    }

    #[test]
    fn invalid_url_fails_before_any_request() {
        let err = http_get("not a url", Duration::from_millis(10)).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidUrl(_)));
    }
}
