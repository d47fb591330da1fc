use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Table;

/// Writes a table as a delimited file: one header row, no positional index
/// column, missing cells as empty fields. An existing file at the target
/// path is overwritten; parent directories are created as needed.
pub struct TableWriter {
    delimiter: u8,
}

impl TableWriter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn write_table(&self, table: &Table, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(path)?;

        writer.write_record(table.columns())?;
        for row in table.rows() {
            writer.write_record(row.iter().map(|cell| cell.render()))?;
        }
        writer.flush()?;

        Ok(())
    }
}

impl Default for TableWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cell;
    use tempfile::TempDir;

    fn sample_table() -> Table {
        Table::new(
            vec!["age".to_string(), "distance_km".to_string()],
            vec![
                vec![Cell::Float(34.0), Cell::Float(3.25)],
                vec![Cell::Float(25.0), Cell::Missing],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_write_with_header_and_missing_fields() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("clean_data.csv");

        TableWriter::new().write_table(&sample_table(), &path)?;

        let contents = fs::read_to_string(&path)?;
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "age,distance_km");
        assert_eq!(lines[1], "34,3.25");
        assert_eq!(lines[2], "25,");

        Ok(())
    }

    #[test]
    fn test_overwrites_existing_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("clean_data.csv");

        fs::write(&path, "stale contents")?;
        TableWriter::new().write_table(&sample_table(), &path)?;

        let contents = fs::read_to_string(&path)?;
        assert!(contents.starts_with("age,distance_km"));

        Ok(())
    }

    #[test]
    fn test_creates_parent_directories() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("data").join("cleaned").join("out.csv");

        TableWriter::new().write_table(&sample_table(), &path)?;
        assert!(path.exists());

        Ok(())
    }
}
