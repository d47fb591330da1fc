/// Header rename table applied after lowercasing the source headers.
pub const COLUMN_RENAMES: [(&str, &str); 11] = [
    ("delivery_person_id", "rider_id"),
    ("delivery_person_age", "age"),
    ("delivery_person_ratings", "ratings"),
    ("delivery_location_latitude", "delivery_latitude"),
    ("delivery_location_longitude", "delivery_longitude"),
    ("time_orderd", "order_time"),
    ("time_order_picked", "order_picked_time"),
    ("weatherconditions", "weather"),
    ("road_traffic_density", "traffic"),
    ("city", "city_type"),
    ("time_taken(min)", "time_taken"),
];

/// Coordinate columns, post-rename
pub const LOCATION_COLUMNS: [&str; 4] = [
    "restaurant_latitude",
    "restaurant_longitude",
    "delivery_latitude",
    "delivery_longitude",
];

/// Intermediate and raw columns removed from the default output
pub const COLUMNS_TO_DROP: [&str; 11] = [
    "rider_id",
    "restaurant_latitude",
    "restaurant_longitude",
    "delivery_latitude",
    "delivery_longitude",
    "order_date",
    "order_time_hour",
    "order_day",
    "extracted_city",
    "order_day_of_week",
    "order_month",
];

/// Coordinate plausibility bounds (absolute degrees)
pub const MIN_VALID_LATITUDE: f64 = 1.0;
pub const MAX_VALID_LATITUDE: f64 = 90.0;
pub const MIN_VALID_LONGITUDE: f64 = 1.0;
pub const MAX_VALID_LONGITUDE: f64 = 180.0;

/// Row-filter bounds
pub const MIN_COURIER_AGE: f64 = 18.0;
pub const MAX_RATING: f64 = 5.0;

/// Literal tokens the source uses for absent values
pub const MISSING_TOKENS: [&str; 2] = ["NaN ", "NaN"];

/// Literal prefixes stripped during normalization
pub const WEATHER_PREFIX: &str = "conditions ";
pub const TIME_TAKEN_PREFIX: &str = "(min) ";

/// Separator between the city code and restaurant code in rider identifiers
pub const CITY_CODE_SEPARATOR: &str = "RES";

/// Categorical columns normalized to trimmed lowercase
pub const CATEGORICAL_COLUMNS: [&str; 5] = [
    "traffic",
    "type_of_order",
    "type_of_vehicle",
    "festival",
    "city_type",
];

pub const WEEKEND_DAYS: [&str; 2] = ["Saturday", "Sunday"];

pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Accepted day-first date formats
pub const DATE_FORMATS: [&str; 2] = ["%d-%m-%Y", "%d/%m/%Y"];

/// Accepted time-of-day formats, with and without seconds or AM/PM marker
pub const TIME_FORMATS: [&str; 4] = ["%H:%M:%S", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];

/// Hour-of-day bin edges, right-closed: (0,6] (6,12] (12,17] (17,20] (20,24]
pub const TIME_OF_DAY_EDGES: [f64; 6] = [0.0, 6.0, 12.0, 17.0, 20.0, 24.0];
pub const TIME_OF_DAY_LABELS: [&str; 5] =
    ["after_midnight", "morning", "afternoon", "evening", "night"];

/// Distance bin edges in km, left-closed: [0,5) [5,10) [10,15) [15,25)
pub const DISTANCE_EDGES: [f64; 5] = [0.0, 5.0, 10.0, 15.0, 25.0];
pub const DISTANCE_LABELS: [&str; 4] = ["short", "medium", "long", "very_long"];
