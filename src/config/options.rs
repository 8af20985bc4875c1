// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::page::locate::{AnyMatcher, HeaderCellMatcher, TableMatcher, TextPrefixMatcher};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Which heuristic picks the data table out of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LocateStrategy {
    /// Marker text near the start of the table ("V/E", "muzzle").
    #[default]
    Text,
    /// Marker in the first row's cells ("Cartridge").
    Header,
    /// Text first, then header.
    Any,
}

impl LocateStrategy {
    pub fn matcher(self) -> Box<dyn TableMatcher> {
        match self {
            LocateStrategy::Text => Box::new(TextPrefixMatcher::default()),
            LocateStrategy::Header => Box::new(HeaderCellMatcher::default()),
            LocateStrategy::Any => Box::new(AnyMatcher::new(vec![
                Box::new(TextPrefixMatcher::default()),
                Box::new(HeaderCellMatcher::default()),
            ])),
        }
    }
}

/// Row acceptance policy for the selected table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RowPolicy {
    /// First cell has letters and a later cell has a '/'.
    #[default]
    Heuristic,
    /// Cell count equals the header row's cell count.
    Schema,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub url: String,
    pub timeout: Duration,
    pub locate: LocateStrategy,
    pub rows: RowPolicy,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(DEFAULT_URL),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            locate: LocateStrategy::default(),
            rows: RowPolicy::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_path: PathBuf,
    /// Rows shown in the post-run summary; 0 disables it.
    pub summary_rows: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            summary_rows: DEFAULT_SUMMARY_ROWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_direct_invocation() {
        let opts = AppOptions::default();
        assert_eq!(opts.scrape.url, DEFAULT_URL);
        assert_eq!(opts.scrape.timeout, Duration::from_secs(10));
        assert_eq!(opts.scrape.rows, RowPolicy::Heuristic);
        assert_eq!(opts.export.out_path, PathBuf::from("rifle_caliber_data_clean.csv"));
    }
}
