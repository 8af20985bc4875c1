// src/page/ballistics.rs
//! Ballistics table → [`ResultTable`].

use tracing::{info, warn};

use crate::config::options::RowPolicy;
use crate::core::html::RawTable;
use crate::store::ResultTable;

use super::{fields, rows};

/// Extract and normalize every data row of the located table, in order.
pub fn extract(table: &RawTable, policy: RowPolicy) -> ResultTable {
    let records: Vec<_> = rows::extract(table, policy)
        .filter_map(|row| fields::build_record(&row))
        .collect();

    if records.is_empty() {
        warn!("table {} yielded no data rows ({policy:?} policy)", table.index + 1);
    } else {
        info!("{} record(s) extracted", records.len());
    }
    ResultTable::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::RawRow;
    use crate::record::Range;

    #[test]
    fn keeps_row_order() {
        let table = RawTable {
            index: 3,
            text: s!("Cartridge V/E Muzzle"),
            rows: vec![
                RawRow::header(["Cartridge", "V/E Muzzle", "V/E 100", "V/E 200", "V/E 300"]),
                RawRow::new(["C (c)", "3/3", "3/3", "3/3", "3/3"]),
                RawRow::new(["A (a)", "1/1", "1/1", "1/1", "1/1"]),
                RawRow::new(["B (b)", "2/2", "2/2", "2/2", "2/2"]),
            ],
        };
        let out = extract(&table, RowPolicy::Heuristic);
        let names: Vec<&str> = out.records().iter().map(|r| r.caliber.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
        assert_eq!(out.records()[1].velocity(Range::Yd300), Some(1.0));
    }
}
