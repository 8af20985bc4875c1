// src/page/locate.rs
//! Data-table selection.
//!
//! Which table holds the data is a guess. The guess is a [`TableMatcher`];
//! [`locate`] takes the first table in document order that matches, with
//! no scoring between several candidates.

use scraper::Html;
use tracing::{debug, info};

use crate::config::consts::{HEADER_MARKERS, TEXT_PREFIX_CHARS, TEXT_MARKERS};
use crate::core::html::{self, RawRow, RawTable};
use crate::error::ScrapeError;

pub trait TableMatcher {
    fn matches(&self, table: &RawTable) -> bool;

    /// Short name for log lines.
    fn describe(&self) -> String;
}

/// Any marker inside the first `prefix_chars` characters of the table's
/// flattened text, case-insensitive.
#[derive(Clone, Debug)]
pub struct TextPrefixMatcher {
    markers: Vec<String>,
    prefix_chars: usize,
}

impl TextPrefixMatcher {
    pub fn new<I, S>(markers: I, prefix_chars: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { markers: lowered(markers), prefix_chars }
    }
}

impl Default for TextPrefixMatcher {
    fn default() -> Self { Self::new(TEXT_MARKERS, TEXT_PREFIX_CHARS) }
}

impl TableMatcher for TextPrefixMatcher {
    fn matches(&self, table: &RawTable) -> bool {
        let prefix: String = table.text.chars().take(self.prefix_chars).collect();
        let prefix = prefix.to_lowercase();
        self.markers.iter().any(|m| prefix.contains(m.as_str()))
    }

    fn describe(&self) -> String {
        format!("text prefix ({} chars) contains {:?}", self.prefix_chars, self.markers)
    }
}

/// Any marker inside one of the first row's cells, case-insensitive.
#[derive(Clone, Debug)]
pub struct HeaderCellMatcher {
    markers: Vec<String>,
}

impl HeaderCellMatcher {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { markers: lowered(markers) }
    }
}

impl HeaderCellMatcher {
    /// Any cell of `row` contains a marker.
    pub fn matches_row(&self, row: &RawRow) -> bool {
        row.cells.iter().flatten().any(|cell| {
            let cell = cell.to_lowercase();
            self.markers.iter().any(|m| cell.contains(m.as_str()))
        })
    }
}

impl Default for HeaderCellMatcher {
    fn default() -> Self { Self::new(HEADER_MARKERS) }
}

impl TableMatcher for HeaderCellMatcher {
    fn matches(&self, table: &RawTable) -> bool {
        table.first_row().is_some_and(|first| self.matches_row(first))
    }

    fn describe(&self) -> String {
        format!("header cell contains {:?}", self.markers)
    }
}

/// Matches when any inner matcher does.
pub struct AnyMatcher {
    inner: Vec<Box<dyn TableMatcher>>,
}

impl AnyMatcher {
    pub fn new(inner: Vec<Box<dyn TableMatcher>>) -> Self { Self { inner } }
}

impl TableMatcher for AnyMatcher {
    fn matches(&self, table: &RawTable) -> bool {
        self.inner.iter().any(|m| m.matches(table))
    }

    fn describe(&self) -> String {
        let parts: Vec<String> = self.inner.iter().map(|m| m.describe()).collect();
        parts.join(" | ")
    }
}

/// First table of `doc` accepted by `matcher`.
pub fn locate(doc: &Html, matcher: &dyn TableMatcher) -> Result<RawTable, ScrapeError> {
    locate_in(html::tables(doc), matcher)
}

/// Same as [`locate`] over already-converted tables.
pub fn locate_in<I>(tables: I, matcher: &dyn TableMatcher) -> Result<RawTable, ScrapeError>
where
    I: IntoIterator<Item = RawTable>,
{
    let mut scanned = 0usize;
    for table in tables {
        scanned += 1;
        if matcher.matches(&table) {
            info!("Selected table {} as data table.", table.index + 1);
            return Ok(table);
        }
        debug!("table {} rejected: {:?}", table.index + 1, html::snippet(&table, 60));
    }
    debug!("no table matched: {}", matcher.describe());
    Err(ScrapeError::NotFound { tables: scanned })
}

fn lowered<I, S>(markers: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    markers.into_iter().map(|m| m.as_ref().to_lowercase()).collect()
}
