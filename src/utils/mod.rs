pub mod binning;
pub mod constants;
pub mod datetime;
pub mod geodesic;
pub mod progress;

pub use binning::{ClosedSide, IntervalTable};
pub use constants::*;
pub use geodesic::geodesic_distance_km;
pub use progress::ProgressReporter;
