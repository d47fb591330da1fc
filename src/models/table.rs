use std::fmt;

use chrono::{NaiveDate, NaiveTime};

use crate::error::{ProcessingError, Result};

/// A single table value. `Missing` is the canonical marker for absent or
/// invalidated fields and is distinct from an empty string or a zero.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Missing,
    Text(String),
    Float(f64),
    Int(i64),
    Date(NaiveDate),
    Time(NaiveTime),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Numeric view of the cell; integers widen to float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Cell::Float(value) => Some(*value),
            Cell::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Cell::Date(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            Cell::Time(value) => Some(*value),
            _ => None,
        }
    }

    /// Render the cell as a delimited-output field. Missing renders empty.
    pub fn render(&self) -> String {
        match self {
            Cell::Missing => String::new(),
            Cell::Text(value) => value.clone(),
            Cell::Float(value) => format!("{}", value),
            Cell::Int(value) => format!("{}", value),
            Cell::Date(value) => value.format("%Y-%m-%d").to_string(),
            Cell::Time(value) => value.format("%H:%M:%S").to_string(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// An in-memory table: ordered column names plus rows of cells. All pipeline
/// stages consume a table by value and return a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table, checking that every row matches the header width.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        let width = columns.len();
        for row in &rows {
            if row.len() != width {
                return Err(ProcessingError::ShapeMismatch {
                    expected: width,
                    actual: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Positional index of a column, or a lookup error.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| ProcessingError::ColumnNotFound {
                column: name.to_string(),
            })
    }

    pub fn cell(&self, row: usize, column: &str) -> Result<&Cell> {
        let index = self.column_index(column)?;
        Ok(&self.rows[row][index])
    }

    /// Lowercase every column header. Row data is untouched.
    pub fn lowercase_columns(mut self) -> Self {
        for column in &mut self.columns {
            *column = column.to_lowercase();
        }
        self
    }

    /// Apply a fixed rename table. Every source name must be present; an
    /// absent source column is a missing-key error.
    pub fn rename_columns(mut self, renames: &[(&str, &str)]) -> Result<Self> {
        for (from, to) in renames {
            let index = self.column_index(from)?;
            self.columns[index] = (*to).to_string();
        }
        Ok(self)
    }

    /// Replace a column's cells in place if it exists, otherwise append it
    /// as the last column. The cell count must match the table height.
    pub fn set_column(mut self, name: &str, cells: Vec<Cell>) -> Result<Self> {
        if cells.len() != self.height() {
            return Err(ProcessingError::ShapeMismatch {
                expected: self.height(),
                actual: cells.len(),
            });
        }
        match self.columns.iter().position(|c| c == name) {
            Some(index) => {
                for (row, cell) in self.rows.iter_mut().zip(cells) {
                    row[index] = cell;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, cell) in self.rows.iter_mut().zip(cells) {
                    row.push(cell);
                }
            }
        }
        Ok(self)
    }

    /// Project away the named columns. Each name must exist; pruning an
    /// already-pruned table with the same list is an error, not a no-op.
    pub fn drop_columns(self, names: &[&str]) -> Result<Self> {
        let mut keep = vec![true; self.columns.len()];
        for name in names {
            let index = self.column_index(name)?;
            keep[index] = false;
        }

        let columns = self
            .columns
            .into_iter()
            .zip(&keep)
            .filter(|(_, k)| **k)
            .map(|(c, _)| c)
            .collect();
        let rows = self
            .rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .zip(&keep)
                    .filter(|(_, k)| **k)
                    .map(|(cell, _)| cell)
                    .collect()
            })
            .collect();

        Ok(Self { columns, rows })
    }

    pub fn drop_column(self, name: &str) -> Result<Self> {
        self.drop_columns(&[name])
    }

    /// Keep only the rows for which the predicate holds. The predicate may
    /// fail, aborting the filter.
    pub fn try_retain_rows<F>(self, mut predicate: F) -> Result<Self>
    where
        F: FnMut(&[Cell]) -> Result<bool>,
    {
        let Table { columns, rows } = self;
        let mut kept = Vec::with_capacity(rows.len());
        for row in rows {
            if predicate(&row)? {
                kept.push(row);
            }
        }
        Ok(Self {
            columns,
            rows: kept,
        })
    }
}
