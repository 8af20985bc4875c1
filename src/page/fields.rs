// src/page/fields.rs
//! Cell-level normalization.
//!
//! Malformed cells are not errors here: a `"<v>/<e>"` cell that does not
//! parse becomes `None` for that range and the record is kept.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::core::html::RawRow;
use crate::core::sanitize::normalize_ws;
use crate::record::{CartridgeRecord, Range, VePair};

static PAREN_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]*)\)").expect("static regex"));
static PAREN_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)").expect("static regex"));

/// Split `"6.5 Creedmoor (140gr SP)"` into `("6.5 Creedmoor", Some("140gr SP"))`.
///
/// Bullet type is the last parenthetical group. Caliber drops every group.
pub fn split_caliber(raw: &str) -> (String, Option<String>) {
    let bullet_type = PAREN_GROUP
        .captures_iter(raw)
        .last()
        .and_then(|c| c.get(1))
        .map(|m| normalize_ws(m.as_str()))
        .filter(|s| !s.is_empty());

    let caliber = normalize_ws(&PAREN_STRIP.replace_all(raw, ""));
    (caliber, bullet_type)
}

/// Split `"2910/2637"` on the first `/` into a velocity/energy pair.
pub fn split_ve(raw: &str) -> Option<VePair> {
    let (v, e) = raw.split_once('/')?;
    let velocity = parse_number(v)?;
    let energy = parse_number(e)?;
    Some(VePair::new(velocity, energy))
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Normalize one accepted row: identity cell, then one V/E cell per range.
/// Missing trailing cells leave their ranges empty. `None` when the
/// identity cell itself is blank.
pub fn build_record(row: &RawRow) -> Option<CartridgeRecord> {
    let (caliber, bullet_type) = split_caliber(row.cell(0)?);

    let mut ve = [None; 4];
    for range in Range::ALL {
        let col = range.index() + 1;
        ve[range.index()] = match row.cell(col) {
            Some(cell) => {
                let pair = split_ve(cell);
                if pair.is_none() {
                    debug!("{caliber}: unparsable {range} V/E cell {cell:?}");
                }
                pair
            }
            None => None,
        };
    }

    Some(CartridgeRecord { caliber, bullet_type, ve })
}
