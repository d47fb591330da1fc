use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ProcessingError, Result};
use crate::models::Table;

/// One row of the cleaned output table, typed for invariant checking.
/// Optional fields hold the missing marker as `None`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CleanedOrder {
    #[validate(range(min = 18.0))]
    pub age: Option<f64>,

    #[validate(range(max = 5.0))]
    pub ratings: Option<f64>,

    pub weather: Option<String>,
    pub traffic: Option<String>,
    pub vehicle_condition: Option<String>,
    pub type_of_order: Option<String>,
    pub type_of_vehicle: Option<String>,
    pub multiple_deliveries: Option<f64>,
    pub festival: Option<String>,
    pub city_type: Option<String>,

    #[validate(range(min = 1))]
    pub time_taken: i64,

    #[validate(range(min = 0, max = 1))]
    pub order_is_weekend: Option<i64>,

    #[validate(range(min = 0.0))]
    pub pickup_time_minutes: Option<f64>,

    pub time_of_day: Option<String>,

    #[validate(range(min = 0.0))]
    pub distance_km: Option<f64>,

    pub distance_type: Option<String>,
}

impl CleanedOrder {
    /// Build a typed row from any table carrying the cleaned output
    /// columns. Missing columns are lookup errors; a non-integer stated
    /// duration is a cast error.
    pub fn from_row(table: &Table, row: usize) -> Result<Self> {
        let time_taken_cell = table.cell(row, "time_taken")?;
        let time_taken =
            time_taken_cell
                .as_int()
                .ok_or_else(|| ProcessingError::NumericCast {
                    column: "time_taken".to_string(),
                    value: time_taken_cell.render(),
                })?;

        Ok(Self {
            age: table.cell(row, "age")?.as_float(),
            ratings: table.cell(row, "ratings")?.as_float(),
            weather: optional_text(table, row, "weather")?,
            traffic: optional_text(table, row, "traffic")?,
            vehicle_condition: optional_text(table, row, "vehicle_condition")?,
            type_of_order: optional_text(table, row, "type_of_order")?,
            type_of_vehicle: optional_text(table, row, "type_of_vehicle")?,
            multiple_deliveries: table.cell(row, "multiple_deliveries")?.as_float(),
            festival: optional_text(table, row, "festival")?,
            city_type: optional_text(table, row, "city_type")?,
            time_taken,
            order_is_weekend: table.cell(row, "order_is_weekend")?.as_int(),
            pickup_time_minutes: table.cell(row, "pickup_time_minutes")?.as_float(),
            time_of_day: optional_text(table, row, "time_of_day")?,
            distance_km: table.cell(row, "distance_km")?.as_float(),
            distance_type: optional_text(table, row, "distance_type")?,
        })
    }

    /// Categorical fields and their names, for casing checks.
    pub fn categoricals(&self) -> [(&'static str, Option<&String>); 6] {
        [
            ("weather", self.weather.as_ref()),
            ("traffic", self.traffic.as_ref()),
            ("type_of_order", self.type_of_order.as_ref()),
            ("type_of_vehicle", self.type_of_vehicle.as_ref()),
            ("festival", self.festival.as_ref()),
            ("city_type", self.city_type.as_ref()),
        ]
    }
}

fn optional_text(table: &Table, row: usize, column: &str) -> Result<Option<String>> {
    Ok(table.cell(row, column)?.as_text().map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_order() -> CleanedOrder {
        CleanedOrder {
            age: Some(34.0),
            ratings: Some(4.5),
            weather: Some("sunny".to_string()),
            traffic: Some("high".to_string()),
            vehicle_condition: Some("2".to_string()),
            type_of_order: Some("snack".to_string()),
            type_of_vehicle: Some("motorcycle".to_string()),
            multiple_deliveries: Some(1.0),
            festival: Some("no".to_string()),
            city_type: Some("urban".to_string()),
            time_taken: 24,
            order_is_weekend: Some(1),
            pickup_time_minutes: Some(20.0),
            time_of_day: Some("night".to_string()),
            distance_km: Some(3.0),
            distance_type: Some("short".to_string()),
        }
    }

    #[test]
    fn test_valid_order_passes() {
        assert!(valid_order().validate().is_ok());
    }

    #[test]
    fn test_underage_rejected() {
        let mut order = valid_order();
        order.age = Some(15.0);
        assert!(order.validate().is_err());
    }

    #[test]
    fn test_rating_above_scale_rejected() {
        let mut order = valid_order();
        order.ratings = Some(6.0);
        assert!(order.validate().is_err());
    }

    #[test]
    fn test_negative_pickup_delta_rejected() {
        let mut order = valid_order();
        order.pickup_time_minutes = Some(-5.0);
        assert!(order.validate().is_err());
    }

    #[test]
    fn test_missing_optionals_pass() {
        let mut order = valid_order();
        order.age = None;
        order.distance_km = None;
        order.distance_type = None;
        assert!(order.validate().is_ok());
    }
}
