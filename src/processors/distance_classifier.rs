use crate::error::Result;
use crate::models::{Cell, Table};
use crate::utils::binning::{ClosedSide, IntervalTable};
use crate::utils::constants::{DISTANCE_EDGES, DISTANCE_LABELS};

/// Stage 4: bucket `distance_km` into ordinal bands. The bins are
/// left-closed right-open; distances of 25 km or more, like missing
/// distances, classify to missing rather than being clamped into the last
/// band.
pub struct DistanceClassifier {
    bins: IntervalTable,
}

impl DistanceClassifier {
    pub fn new() -> Self {
        Self {
            bins: IntervalTable::from_edges(ClosedSide::Left, &DISTANCE_EDGES, &DISTANCE_LABELS),
        }
    }

    pub fn classify(&self, table: Table) -> Result<Table> {
        let index = table.column_index("distance_km")?;
        let cells = table
            .rows()
            .iter()
            .map(|row| match row[index].as_float() {
                Some(distance) => match self.bins.classify(distance) {
                    Some(label) => Cell::text(label),
                    None => Cell::Missing,
                },
                None => Cell::Missing,
            })
            .collect();
        table.set_column("distance_type", cells)
    }
}

impl Default for DistanceClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;

    fn distance_table(cells: Vec<Cell>) -> Table {
        Table::new(
            vec!["distance_km".to_string()],
            cells.into_iter().map(|cell| vec![cell]).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_bucket_membership() {
        let table = distance_table(vec![
            Cell::Float(4.999),
            Cell::Float(5.0),
            Cell::Float(9.999),
            Cell::Float(12.0),
            Cell::Float(20.0),
        ]);
        let table = DistanceClassifier::new().classify(table).unwrap();

        assert_eq!(table.cell(0, "distance_type").unwrap(), &Cell::text("short"));
        assert_eq!(table.cell(1, "distance_type").unwrap(), &Cell::text("medium"));
        assert_eq!(table.cell(2, "distance_type").unwrap(), &Cell::text("medium"));
        assert_eq!(table.cell(3, "distance_type").unwrap(), &Cell::text("long"));
        assert_eq!(
            table.cell(4, "distance_type").unwrap(),
            &Cell::text("very_long")
        );
    }

    #[test]
    fn test_out_of_range_and_missing_classify_to_missing() {
        let table = distance_table(vec![Cell::Float(25.0), Cell::Float(310.5), Cell::Missing]);
        let table = DistanceClassifier::new().classify(table).unwrap();

        assert!(table.cell(0, "distance_type").unwrap().is_missing());
        assert!(table.cell(1, "distance_type").unwrap().is_missing());
        assert!(table.cell(2, "distance_type").unwrap().is_missing());
    }

    #[test]
    fn test_requires_distance_column() {
        let table = Table::new(vec!["other".to_string()], Vec::new()).unwrap();
        let result = DistanceClassifier::new().classify(table);
        assert!(matches!(
            result,
            Err(ProcessingError::ColumnNotFound { .. })
        ));
    }
}
