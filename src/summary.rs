// src/summary.rs
//! Diagnostic snapshot of a result table: columns, first rows, column types.

use std::fmt;

use tabled::{builder::Builder, settings::Style};

use crate::store::ResultTable;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    /// Every non-null cell parses as a finite number.
    Number,
    Text,
    /// No non-null cell at all.
    Empty,
}

impl ColumnType {
    fn infer<'a>(cells: impl Iterator<Item = Option<&'a str>>) -> Self {
        let mut seen = false;
        for cell in cells.flatten() {
            seen = true;
            if !cell.parse::<f64>().is_ok_and(f64::is_finite) { return ColumnType::Text; }
        }
        if seen { ColumnType::Number } else { ColumnType::Empty }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColumnType::Number => "number",
            ColumnType::Text => "text",
            ColumnType::Empty => "empty",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub columns: Vec<String>,
    pub head: Vec<Vec<Option<String>>>,
    pub types: Vec<ColumnType>,
    pub total_rows: usize,
}

impl Summary {
    /// Types are inferred over the whole table, not only the first `n` rows.
    pub fn of(table: &ResultTable, n: usize) -> Self {
        let columns = table.headers();
        let rows = table.to_rows();

        let types = (0..columns.len())
            .map(|c| ColumnType::infer(rows.iter().map(|r| r[c].as_deref())))
            .collect();

        Self {
            total_rows: rows.len(),
            head: rows.into_iter().take(n).collect(),
            columns,
            types,
        }
    }

    pub fn type_of(&self, column: &str) -> Option<ColumnType> {
        let i = self.columns.iter().position(|c| c == column)?;
        self.types.get(i).copied()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Columns ===")?;
        writeln!(f, "{}", self.columns.join(", "))?;

        writeln!(f, "\n=== First rows ({} of {}) ===", self.head.len(), self.total_rows)?;
        let mut b = Builder::default();
        b.push_record(self.columns.iter().cloned());
        for row in &self.head {
            b.push_record(row.iter().map(|c| c.clone().unwrap_or_default()));
        }
        let mut table = b.build();
        table.with(Style::psql());
        writeln!(f, "{table}")?;

        writeln!(f, "\n=== Column types ===")?;
        let width = self.columns.iter().map(String::len).max().unwrap_or(0);
        for (col, ty) in self.columns.iter().zip(&self.types) {
            writeln!(f, "{col:<width$}  {}", ty.name())?;
        }
        Ok(())
    }
}
