use crate::error::Result;
use crate::models::Table;
use crate::utils::constants::COLUMN_RENAMES;

/// Stage 1: lowercase the source headers and remap them to the canonical
/// schema. Row count and order are unchanged; an absent source column is a
/// missing-key error.
pub struct ColumnNormalizer;

impl ColumnNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, table: Table) -> Result<Table> {
        table.lowercase_columns().rename_columns(&COLUMN_RENAMES)
    }
}

impl Default for ColumnNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
