use std::path::Path;

use crate::error::{ProcessingError, Result};
use crate::models::{Cell, Table};

/// Reads a delimited source file wholly into memory. Empty fields load as
/// the missing marker; everything else loads as text for the pipeline to
/// coerce. A missing source file is reported distinctly, before any stage
/// can run on an undefined table.
pub struct TableReader {
    delimiter: u8,
}

impl TableReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn read_table(&self, path: &Path) -> Result<Table> {
        if !path.exists() {
            return Err(ProcessingError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_path(path)?;

        let columns: Vec<String> = reader.headers()?.iter().map(String::from).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let cells = record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        Cell::Missing
                    } else {
                        Cell::text(field)
                    }
                })
                .collect();
            rows.push(cells);
        }

        Table::new(columns, rows)
    }
}

impl Default for TableReader {
    fn default() -> Self {
        Self::new()
    }
}
