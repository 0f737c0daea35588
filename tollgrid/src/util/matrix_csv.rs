//! wide CSV format for a [`DistanceMatrix`]: a header of `id` followed by every
//! location id, then one line per location holding its label and its costs.
use std::{iter, path::Path};

use crate::model::{Cost, DistanceMatrix, LocationId, TollError};
use crate::util::table_io::check_overwrite;

const LABEL_COLUMN: &str = "id";

pub fn write_matrix(
    filepath: &Path,
    matrix: &DistanceMatrix,
    overwrite: bool,
) -> Result<(), TollError> {
    check_overwrite(filepath, overwrite)?;
    let filename = filepath.to_string_lossy().to_string();
    let csv_error = |source| TollError::CsvError {
        filepath: filename.clone(),
        source,
    };
    let mut writer = csv::Writer::from_path(filepath).map_err(csv_error)?;
    let header = iter::once(String::from(LABEL_COLUMN))
        .chain(matrix.locations().iter().map(|id| id.to_string()));
    writer.write_record(header).map_err(csv_error)?;
    for (id, row) in matrix.rows() {
        let record = iter::once(id.to_string()).chain(row.iter().map(|c| c.to_string()));
        writer.write_record(record).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| TollError::IoError {
        filepath: filename.clone(),
        source,
    })?;
    log::info!("wrote {}x{} matrix to {}", matrix.size(), matrix.size(), filename);
    Ok(())
}

/// reads a matrix written by [`write_matrix`].
///
/// # Errors
///
/// * [`TollError::ShapeMismatch`] when the number of rows differs from the number of columns
/// * [`TollError::RaggedRow`] when a row is wider or narrower than the header
/// * [`TollError::InvalidInput`] when row labels do not match the column labels
pub fn read_matrix(filepath: &Path) -> Result<DistanceMatrix, TollError> {
    let filename = filepath.to_string_lossy().to_string();
    let csv_error = |source| TollError::CsvError {
        filepath: filename.clone(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(filepath)
        .map_err(csv_error)?;
    let header = reader.headers().map_err(csv_error)?.clone();
    let columns = header
        .iter()
        .skip(1)
        .map(|label| label.parse::<LocationId>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut labels: Vec<LocationId> = vec![];
    let mut rows: Vec<Vec<Cost>> = vec![];
    for (row_idx, record) in reader.records().enumerate() {
        let r = record.map_err(csv_error)?;
        let label = r
            .get(0)
            .ok_or_else(|| TollError::InvalidInput(format!("row {row_idx} is empty")))?
            .parse::<LocationId>()?;
        let cells = r
            .iter()
            .skip(1)
            .map(|cell| cell.parse::<Cost>())
            .collect::<Result<Vec<_>, _>>()?;
        labels.push(label);
        rows.push(cells);
    }

    let matrix = DistanceMatrix::from_rows(columns, rows)?;
    if labels.as_slice() != matrix.locations() {
        return Err(TollError::InvalidInput(format!(
            "row labels of '{filename}' do not match its column labels"
        )));
    }
    Ok(matrix)
}
