// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::consts::CSV_SEP;
use crate::csv::write_table;
use crate::error::ScrapeError;
use crate::store::ResultTable;

/// Write `table` as CSV to `path`, creating the parent directory if needed.
/// Returns the path written to.
pub fn write_export(path: &Path, table: &ResultTable) -> Result<PathBuf, ScrapeError> {
    let io_err = |source: std::io::Error| ScrapeError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(io_err)?;
        }
    }

    let file = File::create(path).map_err(io_err)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_table(&mut out, table, CSV_SEP).map_err(io_err)?;
    out.flush().map_err(io_err)?;

    info!("Wrote {} record(s) to {}", table.len(), path.display());
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_parent() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out").join("nested").join("rifles.csv");
        let written = write_export(&path, &ResultTable::default()).unwrap();
        assert_eq!(written, path);
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Caliber,Bullet Type,"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn parent_that_is_a_file_is_an_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let err = write_export(&blocker.join("out.csv"), &ResultTable::default()).unwrap_err();
        assert!(matches!(err, ScrapeError::Io { .. }));
    }
}
