// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures of a scrape run. Malformed cells are not errors;
/// they degrade to empty fields on the affected record.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid URL {0:?}: expected an absolute http(s) URL")]
    InvalidUrl(String),

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error from {url}: {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("no data table found ({tables} table(s) scanned)")]
    NotFound { tables: usize },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScrapeError {
    /// True for fetch-side failures (bad URL, transport, status).
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            ScrapeError::InvalidUrl(_) | ScrapeError::Network { .. } | ScrapeError::HttpStatus { .. }
        )
    }
}
