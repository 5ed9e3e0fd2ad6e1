//! Header-checked CSV table read/write shared by both repositories.
//!
//! # Invariants
//! - Columns are mapped by header name, not by position; column order and
//!   extra columns are accepted, a missing required column is not.
//! - The header row is always written, even for an empty table.
//! - An existing but empty (zero-byte) file reads as a table with no rows.

use super::{StoreError, StoreResult, TableSnapshot};
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

/// Static description of one table file.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TableSpec {
    /// Name used in log events.
    pub name: &'static str,
    pub header: &'static [&'static str],
}

pub(crate) fn load_rows<T: DeserializeOwned>(
    spec: TableSpec,
    path: &Path,
) -> StoreResult<TableSnapshot<T>> {
    let started_at = Instant::now();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(
                "event=table_load module=repo status=missing table={} path={}",
                spec.name,
                path.display()
            );
            return Ok(TableSnapshot::missing());
        }
        Err(err) => {
            let err = StoreError::io(path, err);
            log_failure("table_load", spec, &err, started_at);
            return Err(err);
        }
    };

    match read_rows(spec, path, file) {
        Ok(rows) => {
            info!(
                "event=table_load module=repo status=ok table={} rows={} duration_ms={}",
                spec.name,
                rows.len(),
                started_at.elapsed().as_millis()
            );
            Ok(TableSnapshot::present(rows))
        }
        Err(err) => {
            log_failure("table_load", spec, &err, started_at);
            Err(err)
        }
    }
}

pub(crate) fn save_rows<T: Serialize>(
    spec: TableSpec,
    path: &Path,
    rows: &[T],
) -> StoreResult<()> {
    let started_at = Instant::now();

    match write_rows(spec, path, rows) {
        Ok(()) => {
            info!(
                "event=table_save module=repo status=ok table={} rows={} duration_ms={}",
                spec.name,
                rows.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            log_failure("table_save", spec, &err, started_at);
            Err(err)
        }
    }
}

fn read_rows<T: DeserializeOwned>(
    spec: TableSpec,
    path: &Path,
    file: File,
) -> StoreResult<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

    let found = reader
        .headers()
        .map_err(|err| StoreError::csv(path, err))?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    if found.is_empty() {
        return Ok(Vec::new());
    }
    let has_all_columns = spec
        .header
        .iter()
        .all(|column| found.iter().any(|name| name == column));
    if !has_all_columns {
        return Err(StoreError::HeaderMismatch {
            path: path.to_path_buf(),
            expected: spec.header.iter().map(|column| column.to_string()).collect(),
            found,
        });
    }

    let mut rows = Vec::new();
    for row in reader.deserialize::<T>() {
        rows.push(row.map_err(|err| StoreError::csv(path, err))?);
    }
    Ok(rows)
}

fn write_rows<T: Serialize>(spec: TableSpec, path: &Path, rows: &[T]) -> StoreResult<()> {
    // serde only emits headers alongside a first row; write ours explicitly.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|err| StoreError::csv(path, err))?;

    writer
        .write_record(spec.header)
        .map_err(|err| StoreError::csv(path, err))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|err| StoreError::csv(path, err))?;
    }
    writer.flush().map_err(|err| StoreError::io(path, err))
}

fn log_failure(event: &str, spec: TableSpec, err: &StoreError, started_at: Instant) {
    error!(
        "event={} module=repo status=error table={} duration_ms={} error_code={} error={}",
        event,
        spec.name,
        started_at.elapsed().as_millis(),
        err.code(),
        err
    );
}

#[cfg(test)]
mod tests {
    use super::{load_rows, save_rows, TableSpec};
    use crate::repo::StoreError;
    use serde::{Deserialize, Serialize};
    use tempfile::tempdir;

    const SPEC: TableSpec = TableSpec {
        name: "pairs",
        header: &["key", "value"],
    };

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Pair {
        key: String,
        value: u32,
    }

    #[test]
    fn missing_file_is_reported_not_raised() {
        let dir = tempdir().unwrap();
        let snapshot = load_rows::<Pair>(SPEC, &dir.path().join("absent.csv")).unwrap();
        assert!(snapshot.missing);
        assert!(snapshot.rows.is_empty());
    }

    #[test]
    fn empty_table_still_writes_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pairs.csv");
        save_rows::<Pair>(SPEC, &path, &[]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim_end(), "key,value");

        let snapshot = load_rows::<Pair>(SPEC, &path).unwrap();
        assert!(!snapshot.missing);
        assert!(snapshot.rows.is_empty());
    }

    #[test]
    fn zero_byte_file_reads_as_empty_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pairs.csv");
        std::fs::write(&path, "").unwrap();

        let snapshot = load_rows::<Pair>(SPEC, &path).unwrap();
        assert!(!snapshot.missing);
        assert!(snapshot.rows.is_empty());
    }

    #[test]
    fn columns_are_mapped_by_header_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pairs.csv");
        std::fs::write(&path, "key,value\na,1\n").unwrap();

        let snapshot = load_rows::<Pair>(SPEC, &path).unwrap();
        assert_eq!(
            snapshot.rows,
            vec![Pair {
                key: "a".to_string(),
                value: 1
            }]
        );
    }

    #[test]
    fn reordered_header_with_extra_column_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pairs.csv");
        std::fs::write(&path, "note,value,key\nx,2,b\n").unwrap();

        let snapshot = load_rows::<Pair>(SPEC, &path).unwrap();
        assert_eq!(
            snapshot.rows,
            vec![Pair {
                key: "b".to_string(),
                value: 2
            }]
        );
    }

    #[test]
    fn header_missing_a_required_column_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pairs.csv");
        std::fs::write(&path, "value\n1\n").unwrap();

        let err = load_rows::<Pair>(SPEC, &path).unwrap_err();
        assert!(matches!(err, StoreError::HeaderMismatch { .. }));
    }

    #[test]
    fn foreign_header_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pairs.csv");
        std::fs::write(&path, "id,label\n1,a\n").unwrap();

        let err = load_rows::<Pair>(SPEC, &path).unwrap_err();
        assert!(matches!(err, StoreError::HeaderMismatch { .. }));
        assert_eq!(err.code(), "header_mismatch");
    }

    #[test]
    fn malformed_row_propagates_as_csv_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pairs.csv");
        std::fs::write(&path, "key,value\na,not-a-number\n").unwrap();

        let err = load_rows::<Pair>(SPEC, &path).unwrap_err();
        assert!(matches!(err, StoreError::Csv { .. }));
    }
}
