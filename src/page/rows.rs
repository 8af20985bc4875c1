// src/page/rows.rs
//! Row acceptance for the selected table.
//!
//! The header row is the first multi-cell row made of `<th>` cells or
//! naming a header marker ("Cartridge"), falling back to the table's first
//! row. It and any title rows above it are never data. Later header bands
//! are skipped too: all-`<th>` rows, copies of the header row, and marker
//! rows without a single parsable V/E cell. What counts as a data row after
//! that depends on [`RowPolicy`].

use tracing::debug;

use crate::config::consts::MAX_ROW_WIDTH;
use crate::config::options::RowPolicy;
use crate::core::html::{RawRow, RawTable};
use crate::core::sanitize::has_alpha;

use super::fields::split_ve;
use super::locate::HeaderCellMatcher;

/// Lazily yield the data rows of `table`, in table order.
pub fn extract(table: &RawTable, policy: RowPolicy) -> impl Iterator<Item = RawRow> + '_ {
    let markers = HeaderCellMatcher::default();
    let header_ix = header_index(table, &markers);
    let header = header_ix.map(|i| &table.rows[i]);
    let header_len = header.map(RawRow::len).unwrap_or(0);

    table.rows
        .iter()
        .enumerate()
        .skip(header_ix.map_or(0, |i| i + 1))
        .filter(move |(i, row)| {
            let band = is_header_band(row, header, &markers);
            if band {
                debug!("row {} skipped: header band", i + 1);
            }
            !band && !row.is_empty()
        })
        .filter_map(move |(i, row)| {
            let accepted = match policy {
                RowPolicy::Heuristic => looks_like_data(row),
                RowPolicy::Schema => row.len() == header_len,
            };
            if !accepted {
                debug!("row {} skipped ({policy:?}): {:?}", i + 1, row.cells);
                return None;
            }
            Some(match policy {
                RowPolicy::Heuristic => truncate(row),
                RowPolicy::Schema => row.clone(),
            })
        })
}

/// Position of the header row, `None` for a table without rows.
pub fn header_index(table: &RawTable, markers: &HeaderCellMatcher) -> Option<usize> {
    if table.rows.is_empty() {
        return None;
    }
    let found = table.rows
        .iter()
        .position(|row| row.len() > 1 && (row.is_header || (markers.matches_row(row) && !has_ve_cell(row))));
    Some(found.unwrap_or(0))
}

fn is_header_band(row: &RawRow, header: Option<&RawRow>, markers: &HeaderCellMatcher) -> bool {
    row.is_header
        || header.is_some_and(|h| h.cells == row.cells)
        || (markers.matches_row(row) && !has_ve_cell(row))
}

fn has_ve_cell(row: &RawRow) -> bool {
    row.cells.iter().flatten().any(|c| split_ve(c).is_some())
}

/// Identity cell with letters, and at least one `/` among the rest.
pub fn looks_like_data(row: &RawRow) -> bool {
    let Some(first) = row.cell(0) else { return false };
    has_alpha(first)
        && row.cells[1..].iter().flatten().any(|c| c.contains('/'))
}

fn truncate(row: &RawRow) -> RawRow {
    RawRow {
        cells: row.cells.iter().take(MAX_ROW_WIDTH).cloned().collect(),
        is_header: false,
    }
}
