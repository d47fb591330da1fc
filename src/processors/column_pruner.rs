use crate::error::Result;
use crate::models::Table;
use crate::utils::constants::COLUMNS_TO_DROP;

/// Stage 5: project away the raw and intermediate columns that downstream
/// consumers no longer need once the derived features exist. Pure column
/// projection; a name not present in the table is a lookup error, so
/// pruning an already-pruned table fails rather than silently no-opping.
pub struct ColumnPruner {
    columns: Vec<String>,
}

impl ColumnPruner {
    pub fn new() -> Self {
        Self {
            columns: COLUMNS_TO_DROP.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn with_columns(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn prune(&self, table: Table) -> Result<Table> {
        let names: Vec<&str> = self.columns.iter().map(|c| c.as_str()).collect();
        table.drop_columns(&names)
    }
}

impl Default for ColumnPruner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;
    use crate::models::Cell;

    #[test]
    fn test_prunes_configured_columns() {
        let table = Table::new(
            vec![
                "age".to_string(),
                "rider_id".to_string(),
                "distance_km".to_string(),
            ],
            vec![vec![
                Cell::Float(34.0),
                Cell::text("INDORES13DEL02"),
                Cell::Float(3.0),
            ]],
        )
        .unwrap();

        let pruner = ColumnPruner::with_columns(vec!["rider_id".to_string()]);
        let table = pruner.prune(table).unwrap();
        assert_eq!(
            table.columns(),
            &["age".to_string(), "distance_km".to_string()]
        );
    }

    #[test]
    fn test_double_prune_fails() {
        let table = Table::new(
            vec!["age".to_string(), "rider_id".to_string()],
            Vec::new(),
        )
        .unwrap();

        let pruner = ColumnPruner::with_columns(vec!["rider_id".to_string()]);
        let pruned = pruner.prune(table).unwrap();
        let result = pruner.prune(pruned);
        assert!(matches!(
            result,
            Err(ProcessingError::ColumnNotFound { .. })
        ));
    }

    #[test]
    fn test_empty_list_keeps_everything() {
        let table = Table::new(vec!["age".to_string()], Vec::new()).unwrap();
        let pruner = ColumnPruner::with_columns(Vec::new());
        let table = pruner.prune(table).unwrap();
        assert_eq!(table.columns(), &["age".to_string()]);
    }
}
