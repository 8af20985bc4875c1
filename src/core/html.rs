// src/core/html.rs
//! Markup → table IR.
//!
//! Everything downstream of this module works on [`RawTable`] / [`RawRow`]
//! and never sees `scraper` types. Cell text is whitespace-normalized and
//! blank cells are `None`.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::sanitize::{non_empty, normalize_ws};

static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").expect("static selector"));
static TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("static selector"));

/// One `<tr>`: its direct `<td>`/`<th>` cells in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawRow {
    pub cells: Vec<Option<String>>,
    /// Every cell was a `<th>`.
    pub is_header: bool,
}

impl RawRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            cells: cells.into_iter().map(|c| non_empty(c.as_ref())).collect(),
            is_header: false,
        }
    }

    pub fn header<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { is_header: true, ..Self::new(cells) }
    }

    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    pub fn cell(&self, i: usize) -> Option<&str> {
        self.cells.get(i).and_then(|c| c.as_deref())
    }
}

/// A `<table>` flattened to text plus rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawTable {
    /// Position among all tables of the document (0-based, document order).
    pub index: usize,
    /// Concatenated text content, as the browser would select it.
    pub text: String,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn first_row(&self) -> Option<&RawRow> { self.rows.first() }
}

pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// All tables of `doc` in document order, converted lazily.
/// Nested tables are yielded too, after their parent.
pub fn tables(doc: &Html) -> impl Iterator<Item = RawTable> + '_ {
    doc.select(&TABLE)
        .enumerate()
        .map(|(index, el)| table_from_element(index, el))
}

fn table_from_element(index: usize, el: ElementRef<'_>) -> RawTable {
    let text: String = el.text().collect();
    let rows = el.select(&TR).map(row_from_element).collect();
    RawTable { index, text, rows }
}

fn row_from_element(tr: ElementRef<'_>) -> RawRow {
    let mut cells = Vec::new();
    let mut all_th = true;

    for child in tr.children().filter_map(ElementRef::wrap) {
        let name = child.value().name();
        if !name.eq_ignore_ascii_case("td") && !name.eq_ignore_ascii_case("th") { continue; }
        all_th &= name.eq_ignore_ascii_case("th");
        let text: String = child.text().collect();
        cells.push(non_empty(&text));
    }

    RawRow { is_header: all_th && !cells.is_empty(), cells }
}

/// Text of a table, whitespace-collapsed. Handy for log lines.
pub fn snippet(table: &RawTable, max_chars: usize) -> String {
    normalize_ws(&table.text).chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <table id="nav"><tr><td>Home</td><td>Rifles</td></tr></table>
          <table>
            <tr><th>Cartridge (Wb + type)</th><th>V/E Muzzle</th></tr>
            <tr><td> .243 Win.
                 (100gr SP) </td><td>2960/1945</td></tr>
            <tr><td>&nbsp;</td><td></td></tr>
          </table>
        </body></html>"#;

    #[test]
    fn tables_in_document_order() {
        let doc = parse_document(PAGE);
        let all: Vec<RawTable> = tables(&doc).collect();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].index, 0);
        assert_eq!(all[1].index, 1);
        assert!(all[1].text.contains("V/E Muzzle"));
    }

    #[test]
    fn rows_cells_and_header_flag() {
        let doc = parse_document(PAGE);
        let t = tables(&doc).nth(1).unwrap();
        assert_eq!(t.rows.len(), 3);
        assert!(t.rows[0].is_header);
        assert!(!t.rows[1].is_header);
        assert_eq!(t.rows[1].cell(0), Some(".243 Win. (100gr SP)"));
        assert_eq!(t.rows[1].cell(1), Some("2960/1945"));
        // blank cells are explicit nulls, not empty strings
        assert_eq!(t.rows[2].cells, vec![None, None]);
    }

    #[test]
    fn snippet_is_collapsed_and_bounded() {
        let doc = parse_document(PAGE);
        let t = tables(&doc).nth(1).unwrap();
        let s = snippet(&t, 12);
        assert_eq!(s, "Cartridge (W");
    }
}
