#[derive(thiserror::Error, Debug)]
pub enum TollError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("matrix has {rows} rows and {columns} columns, expected a square matrix")]
    ShapeMismatch { rows: usize, columns: usize },
    #[error("matrix row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("failed reading or writing CSV file '{filepath}': {source}")]
    CsvError {
        filepath: String,
        source: csv::Error,
    },
    #[error("failure with file '{filepath}': {source}")]
    IoError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("{0}")]
    InternalError(String),
}
