use crate::error::Result;
use crate::models::{Cell, Table};
use crate::utils::constants::{
    LOCATION_COLUMNS, MAX_VALID_LATITUDE, MAX_VALID_LONGITUDE, MIN_VALID_LATITUDE,
    MIN_VALID_LONGITUDE,
};

/// Stage 2: coerce the four coordinate columns to numeric, normalize sign,
/// and nullify out-of-range values. The source contains sign errors, zeros
/// and out-of-range sentinels; all become the missing marker rather than
/// being clamped or dropped, so the row count never changes here.
pub struct CoordinateSanitizer;

impl CoordinateSanitizer {
    pub fn new() -> Self {
        Self
    }

    pub fn sanitize(&self, mut table: Table) -> Result<Table> {
        for column in LOCATION_COLUMNS {
            let (min, max) = if column.contains("latitude") {
                (MIN_VALID_LATITUDE, MAX_VALID_LATITUDE)
            } else {
                (MIN_VALID_LONGITUDE, MAX_VALID_LONGITUDE)
            };

            let index = table.column_index(column)?;
            let cells = table
                .rows()
                .iter()
                .map(|row| sanitize_cell(&row[index], min, max))
                .collect();
            table = table.set_column(column, cells)?;
        }
        Ok(table)
    }
}

impl Default for CoordinateSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

fn sanitize_cell(cell: &Cell, min: f64, max: f64) -> Cell {
    let numeric = match cell {
        Cell::Text(value) => match value.trim().parse::<f64>() {
            Ok(parsed) => parsed,
            Err(_) => return Cell::Missing,
        },
        Cell::Float(value) => *value,
        Cell::Int(value) => *value as f64,
        _ => return Cell::Missing,
    };

    let absolute = numeric.abs();
    if absolute.is_nan() || absolute < min || absolute > max {
        Cell::Missing
    } else {
        Cell::Float(absolute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate_table(restaurant_lat: Cell) -> Table {
        Table::new(
            LOCATION_COLUMNS.iter().map(|c| c.to_string()).collect(),
            vec![vec![
                restaurant_lat,
                Cell::text("75.892471"),
                Cell::text("22.765049"),
                Cell::text("75.912471"),
            ]],
        )
        .unwrap()
    }

    #[test]
    fn test_numeric_coercion() {
        let table = CoordinateSanitizer::new()
            .sanitize(coordinate_table(Cell::text("22.745049")))
            .unwrap();
        assert_eq!(
            table.cell(0, "restaurant_latitude").unwrap(),
            &Cell::Float(22.745049)
        );
    }

    #[test]
    fn test_sign_errors_corrected() {
        let table = CoordinateSanitizer::new()
            .sanitize(coordinate_table(Cell::text("-22.745049")))
            .unwrap();
        assert_eq!(
            table.cell(0, "restaurant_latitude").unwrap(),
            &Cell::Float(22.745049)
        );
    }

    #[test]
    fn test_out_of_range_latitude_becomes_missing() {
        let table = CoordinateSanitizer::new()
            .sanitize(coordinate_table(Cell::text("-200.0")))
            .unwrap();
        // Out-of-range is nullified, not clamped; the row survives
        assert_eq!(table.height(), 1);
        assert!(table.cell(0, "restaurant_latitude").unwrap().is_missing());
    }

    #[test]
    fn test_zero_coordinate_becomes_missing() {
        let table = CoordinateSanitizer::new()
            .sanitize(coordinate_table(Cell::text("0.0")))
            .unwrap();
        assert!(table.cell(0, "restaurant_latitude").unwrap().is_missing());
    }

    #[test]
    fn test_non_numeric_becomes_missing() {
        let table = CoordinateSanitizer::new()
            .sanitize(coordinate_table(Cell::text("NaN ")))
            .unwrap();
        assert!(table.cell(0, "restaurant_latitude").unwrap().is_missing());
    }

    #[test]
    fn test_longitude_range_wider_than_latitude() {
        let mut table = coordinate_table(Cell::text("22.745049"));
        table = table
            .set_column("restaurant_longitude", vec![Cell::text("120.5")])
            .unwrap();
        let table = CoordinateSanitizer::new().sanitize(table).unwrap();
        assert_eq!(
            table.cell(0, "restaurant_longitude").unwrap(),
            &Cell::Float(120.5)
        );
    }
}
