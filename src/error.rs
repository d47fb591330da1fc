use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Source file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Column '{column}' not found")]
    ColumnNotFound { column: String },

    #[error("Invalid numeric value in column '{column}': '{value}'")]
    NumericCast { column: String, value: String },

    #[error("Invalid date in column '{column}': '{value}'")]
    DateParse { column: String, value: String },

    #[error("Invalid time in column '{column}': '{value}'")]
    TimeParse { column: String, value: String },

    #[error("Row has {actual} cells, expected {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
