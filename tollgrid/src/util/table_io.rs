use std::{fmt::Display, path::Path};

use kdam::tqdm;
use serde::{de::DeserializeOwned, Serialize};

use crate::model::TollError;

/// reads every row of a CSV file with headers into `T`
pub fn read_rows<T: DeserializeOwned>(filepath: &Path) -> Result<Vec<T>, TollError> {
    let filename = filepath.to_string_lossy().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(filepath)
        .map_err(|source| TollError::CsvError {
            filepath: filename.clone(),
            source,
        })?;
    let rows = reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| TollError::CsvError {
            filepath: filename.clone(),
            source,
        })?;
    log::debug!("read {} rows from {}", rows.len(), filename);
    Ok(rows)
}

/// writes rows to a CSV file with a header taken from the field names of `T`
pub fn write_rows<T: Serialize>(
    filepath: &Path,
    rows: &[T],
    overwrite: bool,
) -> Result<(), TollError> {
    check_overwrite(filepath, overwrite)?;
    let filename = filepath.to_string_lossy().to_string();
    let mut writer = csv::Writer::from_path(filepath).map_err(|source| TollError::CsvError {
        filepath: filename.clone(),
        source,
    })?;
    let write_iter = tqdm!(
        rows.iter(),
        desc = format!("writing {filename}"),
        total = rows.len()
    );
    for row in write_iter {
        writer
            .serialize(row)
            .map_err(|source| TollError::CsvError {
                filepath: filename.clone(),
                source,
            })?;
    }
    writer.flush().map_err(|source| TollError::IoError {
        filepath: filename.clone(),
        source,
    })?;
    log::info!("wrote {} rows to {}", rows.len(), filename);
    Ok(())
}

/// writes a single-column CSV file. the header is written even when there are
/// no values, so an empty selection still reads back as a table.
pub fn write_column<T: Display>(
    filepath: &Path,
    column: &str,
    values: &[T],
    overwrite: bool,
) -> Result<(), TollError> {
    check_overwrite(filepath, overwrite)?;
    let filename = filepath.to_string_lossy().to_string();
    let csv_error = |source| TollError::CsvError {
        filepath: filename.clone(),
        source,
    };
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(filepath)
        .map_err(csv_error)?;
    writer.write_record([column]).map_err(csv_error)?;
    for value in values.iter() {
        writer
            .write_record([value.to_string()])
            .map_err(csv_error)?;
    }
    writer.flush().map_err(|source| TollError::IoError {
        filepath: filename.clone(),
        source,
    })?;
    log::info!("wrote {} {} values to {}", values.len(), column, filename);
    Ok(())
}

/// fails if `filepath` exists and we are not allowed to replace it
pub(crate) fn check_overwrite(filepath: &Path, overwrite: bool) -> Result<(), TollError> {
    if filepath.exists() && !overwrite {
        Err(TollError::InvalidInput(format!(
            "output file '{}' already exists and overwrite is not enabled",
            filepath.to_string_lossy()
        )))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cost, LocationId, TollEdge, UnrolledRow};
    use std::path::PathBuf;

    fn test_directory(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("tollgrid-tests").join(name);
        std::fs::create_dir_all(&dir).expect("temp dir should be writable");
        dir
    }

    #[test]
    fn test_unreachable_survives_csv() {
        let filepath = test_directory("table_io_unreachable").join("unrolled.csv");
        let rows = vec![
            UnrolledRow::new(LocationId(1), LocationId(2), Cost::Finite(9.7)),
            UnrolledRow::new(LocationId(2), LocationId(3), Cost::Unreachable),
        ];
        write_rows(&filepath, &rows, true).expect("should write");
        let contents = std::fs::read_to_string(&filepath).expect("should read back");
        assert!(contents.contains("2,3,inf"));

        let read: Vec<UnrolledRow> = read_rows(&filepath).expect("should parse");
        assert_eq!(read, rows);
    }

    #[test]
    fn test_read_edges() {
        let filepath = test_directory("table_io_edges").join("edges.csv");
        std::fs::write(&filepath, "id_start,id_end,distance\n1001400, 1001402, 9.7\n")
            .expect("should write fixture");
        let edges: Vec<TollEdge> = read_rows(&filepath).expect("should parse");
        assert_eq!(
            edges,
            vec![TollEdge::new(LocationId(1001400), LocationId(1001402), 9.7)]
        );
    }

    #[test]
    fn test_column_header_without_values() {
        let filepath = test_directory("table_io_empty_column").join("ids.csv");
        let empty: Vec<LocationId> = vec![];
        write_column(&filepath, "id_start", &empty, true).expect("should write");
        let contents = std::fs::read_to_string(&filepath).expect("should read back");
        assert_eq!(contents, "id_start\n");

        write_column(&filepath, "id_start", &[LocationId(3), LocationId(4)], true)
            .expect("should write");
        let contents = std::fs::read_to_string(&filepath).expect("should read back");
        assert_eq!(contents, "id_start\n3\n4\n");
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let filepath = test_directory("table_io_overwrite").join("rows.csv");
        let rows = vec![UnrolledRow::new(LocationId(1), LocationId(2), Cost::ZERO)];
        write_rows(&filepath, &rows, true).expect("should write");
        let result = write_rows(&filepath, &rows, false);
        assert!(matches!(result, Err(TollError::InvalidInput(_))));
    }
}
