// src/csv.rs
use std::io::{self, Write};

use crate::store::ResultTable;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single delimited row to any writer. `None` is an empty field.
pub fn write_row<W, S>(mut w: W, row: &[Option<S>], sep: char) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        let Some(cell) = cell else { continue };
        let cell = cell.as_ref();
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header row first, then one line per record. No index column.
pub fn write_table<W: Write>(mut w: W, table: &ResultTable, sep: char) -> io::Result<()> {
    let headers: Vec<Option<String>> = table.headers().into_iter().map(Some).collect();
    write_row(&mut w, &headers, sep)?;
    for row in table.to_rows() {
        write_row(&mut w, &row, sep)?;
    }
    Ok(())
}

pub fn to_export_string(table: &ResultTable, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_table(&mut buf, table, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
