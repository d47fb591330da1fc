use chrono::Timelike;

use crate::error::{ProcessingError, Result};
use crate::models::{Cell, Table};
use crate::utils::binning::{ClosedSide, IntervalTable};
use crate::utils::constants::{
    CATEGORICAL_COLUMNS, CITY_CODE_SEPARATOR, MAX_RATING, MIN_COURIER_AGE, MISSING_TOKENS,
    TIME_OF_DAY_EDGES, TIME_OF_DAY_LABELS, TIME_TAKEN_PREFIX, WEATHER_PREFIX,
};
use crate::utils::datetime::{calendar_parts, minutes_between, parse_date_day_first, parse_time_mixed};
use crate::utils::geodesic::geodesic_distance_km;

/// Stage 3: drop structurally invalid rows and derive the calendar,
/// time-of-day and distance features. The steps run in a fixed order; each
/// one depends on the table state produced by the previous step.
pub struct RecordCleaner;

impl RecordCleaner {
    pub fn new() -> Self {
        Self
    }

    pub fn clean(&self, table: Table) -> Result<Table> {
        let table = drop_identifier(table)?;
        let table = filter_implausible_ages(table)?;
        let table = filter_implausible_ratings(table)?;
        let table = normalize_missing_tokens(table)?;
        let table = derive_city_code(table)?;
        let table = cast_to_float(table, "age")?;
        let table = cast_to_float(table, "ratings")?;
        let table = parse_order_dates(table)?;
        let table = derive_calendar_features(table)?;
        let table = parse_order_times(table, "order_time")?;
        let table = parse_order_times(table, "order_picked_time")?;
        let table = derive_pickup_minutes(table)?;
        let table = derive_order_hour(table)?;
        let table = derive_time_of_day(table)?;
        let table = normalize_weather(table)?;
        let table = normalize_categoricals(table)?;
        let table = cast_to_float(table, "multiple_deliveries")?;
        let table = parse_duration(table)?;
        let table = derive_distance(table)?;
        table.drop_columns(&["order_time", "order_picked_time"])
    }
}

impl Default for RecordCleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// The raw order id plays no further role.
fn drop_identifier(table: Table) -> Result<Table> {
    table.drop_column("id")
}

fn filter_implausible_ages(table: Table) -> Result<Table> {
    let index = table.column_index("age")?;
    table.try_retain_rows(|row| {
        Ok(match float_or_missing(&row[index], "age")? {
            Some(age) => age >= MIN_COURIER_AGE,
            None => true,
        })
    })
}

fn filter_implausible_ratings(table: Table) -> Result<Table> {
    let index = table.column_index("ratings")?;
    table.try_retain_rows(|row| {
        Ok(match float_or_missing(&row[index], "ratings")? {
            Some(rating) => rating <= MAX_RATING,
            None => true,
        })
    })
}

/// Float view of a raw cell. The literal missing tokens compare as missing;
/// anything else non-numeric is an explicit cast failure.
fn float_or_missing(cell: &Cell, column: &str) -> Result<Option<f64>> {
    match cell {
        Cell::Missing => Ok(None),
        Cell::Float(value) => Ok(Some(*value)),
        Cell::Int(value) => Ok(Some(*value as f64)),
        Cell::Text(value) => {
            let trimmed = value.trim();
            if trimmed.eq_ignore_ascii_case("nan") {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map(Some)
                .map_err(|_| ProcessingError::NumericCast {
                    column: column.to_string(),
                    value: value.clone(),
                })
        }
        _ => Ok(None),
    }
}

/// Replace the source's literal "NaN" tokens with the missing marker, in
/// every column.
fn normalize_missing_tokens(mut table: Table) -> Result<Table> {
    let columns: Vec<String> = table.columns().to_vec();
    for column in columns {
        let index = table.column_index(&column)?;
        let cells: Vec<Cell> = table
            .rows()
            .iter()
            .map(|row| match &row[index] {
                Cell::Text(value) if MISSING_TOKENS.contains(&value.as_str()) => Cell::Missing,
                other => other.clone(),
            })
            .collect();
        table = table.set_column(&column, cells)?;
    }
    Ok(table)
}

/// The rider identifier concatenates a city code and a restaurant code with
/// the literal separator "RES"; recover the city code.
fn derive_city_code(table: Table) -> Result<Table> {
    let index = table.column_index("rider_id")?;
    let cells = table
        .rows()
        .iter()
        .map(|row| match &row[index] {
            Cell::Text(value) => {
                let city = value
                    .split(CITY_CODE_SEPARATOR)
                    .next()
                    .unwrap_or(value.as_str());
                Cell::text(city)
            }
            _ => Cell::Missing,
        })
        .collect();
    table.set_column("extracted_city", cells)
}

fn cast_to_float(table: Table, column: &str) -> Result<Table> {
    let index = table.column_index(column)?;
    let mut cells = Vec::with_capacity(table.height());
    for row in table.rows() {
        cells.push(match float_or_missing(&row[index], column)? {
            Some(value) => Cell::Float(value),
            None => Cell::Missing,
        });
    }
    table.set_column(column, cells)
}

fn parse_order_dates(table: Table) -> Result<Table> {
    let index = table.column_index("order_date")?;
    let mut cells = Vec::with_capacity(table.height());
    for row in table.rows() {
        cells.push(match &row[index] {
            Cell::Missing => Cell::Missing,
            Cell::Date(date) => Cell::Date(*date),
            Cell::Text(value) => {
                let date =
                    parse_date_day_first(value).ok_or_else(|| ProcessingError::DateParse {
                        column: "order_date".to_string(),
                        value: value.clone(),
                    })?;
                Cell::Date(date)
            }
            other => {
                return Err(ProcessingError::DateParse {
                    column: "order_date".to_string(),
                    value: other.render(),
                })
            }
        });
    }
    table.set_column("order_date", cells)
}

fn derive_calendar_features(table: Table) -> Result<Table> {
    let index = table.column_index("order_date")?;
    let mut days = Vec::with_capacity(table.height());
    let mut months = Vec::with_capacity(table.height());
    let mut weekday_names = Vec::with_capacity(table.height());
    let mut weekend_flags = Vec::with_capacity(table.height());

    for row in table.rows() {
        match row[index].as_date() {
            Some(date) => {
                let parts = calendar_parts(date);
                days.push(Cell::Int(parts.day as i64));
                months.push(Cell::Int(parts.month as i64));
                weekday_names.push(Cell::text(parts.day_of_week));
                weekend_flags.push(Cell::Int(parts.is_weekend as i64));
            }
            None => {
                days.push(Cell::Missing);
                months.push(Cell::Missing);
                weekday_names.push(Cell::Missing);
                weekend_flags.push(Cell::Missing);
            }
        }
    }

    table
        .set_column("order_day", days)?
        .set_column("order_month", months)?
        .set_column("order_day_of_week", weekday_names)?
        .set_column("order_is_weekend", weekend_flags)
}

/// Parse a time-of-day column, tolerating the source's mixed formats.
/// Missing values stay missing; malformed ones abort the pipeline.
fn parse_order_times(table: Table, column: &str) -> Result<Table> {
    let index = table.column_index(column)?;
    let mut cells = Vec::with_capacity(table.height());
    for row in table.rows() {
        cells.push(match &row[index] {
            Cell::Missing => Cell::Missing,
            Cell::Time(time) => Cell::Time(*time),
            Cell::Text(value) => {
                let time = parse_time_mixed(value).ok_or_else(|| ProcessingError::TimeParse {
                    column: column.to_string(),
                    value: value.clone(),
                })?;
                Cell::Time(time)
            }
            other => {
                return Err(ProcessingError::TimeParse {
                    column: column.to_string(),
                    value: other.render(),
                })
            }
        });
    }
    table.set_column(column, cells)
}

fn derive_pickup_minutes(table: Table) -> Result<Table> {
    let ordered_index = table.column_index("order_time")?;
    let picked_index = table.column_index("order_picked_time")?;
    let cells = table
        .rows()
        .iter()
        .map(|row| {
            match (row[ordered_index].as_time(), row[picked_index].as_time()) {
                (Some(ordered), Some(picked)) => Cell::Float(minutes_between(ordered, picked)),
                _ => Cell::Missing,
            }
        })
        .collect();
    table.set_column("pickup_time_minutes", cells)
}

fn derive_order_hour(table: Table) -> Result<Table> {
    let index = table.column_index("order_time")?;
    let cells = table
        .rows()
        .iter()
        .map(|row| match row[index].as_time() {
            Some(time) => Cell::Int(time.hour() as i64),
            None => Cell::Missing,
        })
        .collect();
    table.set_column("order_time_hour", cells)
}

fn derive_time_of_day(table: Table) -> Result<Table> {
    let bins = IntervalTable::from_edges(ClosedSide::Right, &TIME_OF_DAY_EDGES, &TIME_OF_DAY_LABELS);
    let index = table.column_index("order_time_hour")?;
    let cells = table
        .rows()
        .iter()
        .map(|row| match row[index].as_float() {
            Some(hour) => match bins.classify(hour) {
                Some(label) => Cell::text(label),
                None => Cell::Missing,
            },
            None => Cell::Missing,
        })
        .collect();
    table.set_column("time_of_day", cells)
}

/// The source prefixes every weather value with a literal "conditions "
/// token; strip it, lowercase, and treat the literal "nan" as missing.
fn normalize_weather(table: Table) -> Result<Table> {
    let index = table.column_index("weather")?;
    let cells = table
        .rows()
        .iter()
        .map(|row| match &row[index] {
            Cell::Text(value) => {
                let stripped = value.strip_prefix(WEATHER_PREFIX).unwrap_or(value);
                let normalized = stripped.to_lowercase();
                if normalized == "nan" {
                    Cell::Missing
                } else {
                    Cell::Text(normalized)
                }
            }
            other => other.clone(),
        })
        .collect();
    table.set_column("weather", cells)
}

fn normalize_categoricals(mut table: Table) -> Result<Table> {
    for column in CATEGORICAL_COLUMNS {
        let index = table.column_index(column)?;
        let cells = table
            .rows()
            .iter()
            .map(|row| match &row[index] {
                Cell::Text(value) => Cell::Text(value.trim().to_lowercase()),
                other => other.clone(),
            })
            .collect();
        table = table.set_column(column, cells)?;
    }
    Ok(table)
}

/// The stated delivery duration arrives as "(min) 24"; strip the prefix and
/// cast to an integer. A missing or malformed duration is a hard cast
/// failure, as this is the prediction target.
fn parse_duration(table: Table) -> Result<Table> {
    let index = table.column_index("time_taken")?;
    let mut cells = Vec::with_capacity(table.height());
    for row in table.rows() {
        let cell = match &row[index] {
            Cell::Text(value) => {
                let stripped = value.strip_prefix(TIME_TAKEN_PREFIX).unwrap_or(value);
                let minutes =
                    stripped
                        .trim()
                        .parse::<i64>()
                        .map_err(|_| ProcessingError::NumericCast {
                            column: "time_taken".to_string(),
                            value: value.clone(),
                        })?;
                Cell::Int(minutes)
            }
            Cell::Int(value) => Cell::Int(*value),
            other => {
                return Err(ProcessingError::NumericCast {
                    column: "time_taken".to_string(),
                    value: other.render(),
                })
            }
        };
        cells.push(cell);
    }
    table.set_column("time_taken", cells)
}

/// Geodesic distance between the restaurant and delivery coordinates. Any
/// missing coordinate yields a missing distance; a partial pair is never
/// used and never an error.
fn derive_distance(table: Table) -> Result<Table> {
    let restaurant_lat = table.column_index("restaurant_latitude")?;
    let restaurant_lon = table.column_index("restaurant_longitude")?;
    let delivery_lat = table.column_index("delivery_latitude")?;
    let delivery_lon = table.column_index("delivery_longitude")?;

    let cells = table
        .rows()
        .iter()
        .map(|row| {
            match (
                row[restaurant_lat].as_float(),
                row[restaurant_lon].as_float(),
                row[delivery_lat].as_float(),
                row[delivery_lon].as_float(),
            ) {
                (Some(lat1), Some(lon1), Some(lat2), Some(lon2)) => {
                    Cell::Float(geodesic_distance_km(lat1, lon1, lat2, lon2))
                }
                _ => Cell::Missing,
            }
        })
        .collect();
    table.set_column("distance_km", cells)
}
