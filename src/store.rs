// src/store.rs
//! The result table: normalized records under a fixed column schema.

use crate::record::{CartridgeRecord, Range};

pub const COLUMNS: [&str; 10] = [
    "Caliber", "Bullet Type",
    "Muzzle Velocity", "Muzzle Energy",
    "100yd Velocity", "100yd Energy",
    "200yd Velocity", "200yd Energy",
    "300yd Velocity", "300yd Energy",
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultTable {
    records: Vec<CartridgeRecord>,
}

impl ResultTable {
    pub fn new(records: Vec<CartridgeRecord>) -> Self { Self { records } }

    pub fn records(&self) -> &[CartridgeRecord] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn headers(&self) -> Vec<String> {
        COLUMNS.iter().map(|c| s!(*c)).collect()
    }

    /// Rows as text cells in `COLUMNS` order. `None` is a null field.
    pub fn to_rows(&self) -> Vec<Vec<Option<String>>> {
        self.records.iter().map(record_cells).collect()
    }
}

pub fn record_cells(r: &CartridgeRecord) -> Vec<Option<String>> {
    let mut row = Vec::with_capacity(COLUMNS.len());
    row.push(Some(r.caliber.clone()));
    row.push(r.bullet_type.clone());
    for range in Range::ALL {
        row.push(r.velocity(range).map(fmt_number));
        row.push(r.energy(range).map(fmt_number));
    }
    row
}

/// Whole numbers keep one decimal (`2910.0`) so the column reads as float.
pub fn fmt_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{n:.1}")
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::VePair;

    #[test]
    fn number_formatting() {
        assert_eq!(fmt_number(2910.0), "2910.0");
        assert_eq!(fmt_number(127.25), "127.25");
        assert_eq!(fmt_number(0.0), "0.0");
    }

    #[test]
    fn cells_follow_column_order() {
        let rec = CartridgeRecord {
            caliber: s!(".30-06 Springfield"),
            bullet_type: None,
            ve: [Some(VePair::new(2900.0, 2820.0)), None, None, Some(VePair::new(2100.0, 1470.5))],
        };
        let table = ResultTable::new(vec![rec]);
        let row = &table.to_rows()[0];
        assert_eq!(row.len(), COLUMNS.len());
        assert_eq!(row[0].as_deref(), Some(".30-06 Springfield"));
        assert_eq!(row[1], None);
        assert_eq!(row[2].as_deref(), Some("2900.0"));
        assert_eq!(row[3].as_deref(), Some("2820.0"));
        assert_eq!(row[4], None);
        assert_eq!(row[7], None);
        assert_eq!(row[9].as_deref(), Some("1470.5"));
    }
}
