use crate::error::Result;
use crate::models::Table;
use crate::processors::{
    ColumnNormalizer, ColumnPruner, CoordinateSanitizer, DistanceClassifier, RecordCleaner,
};

/// The five-stage cleaning pipeline. Stages run strictly in order, each
/// consuming the table the previous one produced. The only configuration is
/// the output column set handed to the final pruning stage.
pub struct CleaningPipeline {
    pruner: ColumnPruner,
}

impl CleaningPipeline {
    pub fn new() -> Self {
        Self {
            pruner: ColumnPruner::new(),
        }
    }

    /// Pipeline with a custom drop list. An empty list keeps every raw and
    /// intermediate column in the output.
    pub fn with_columns_to_drop(columns: Vec<String>) -> Self {
        Self {
            pruner: ColumnPruner::with_columns(columns),
        }
    }

    /// Run all five stages and return the cleaned, pruned table.
    pub fn run(&self, table: Table) -> Result<Table> {
        let table = self.derive(table)?;
        self.pruner.prune(table)
    }

    /// Stages 1-4 only: the fully derived table with every raw and
    /// intermediate column still present. Used by invariant checking.
    pub fn derive(&self, table: Table) -> Result<Table> {
        let table = ColumnNormalizer::new().normalize(table)?;
        let table = CoordinateSanitizer::new().sanitize(table)?;
        let table = RecordCleaner::new().clean(table)?;
        DistanceClassifier::new().classify(table)
    }
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::new()
    }
}
