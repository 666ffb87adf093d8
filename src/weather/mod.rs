//! Weather snapshot loading
//!
//! Weather feeds arrive loosely typed: producers disagree on key names
//! (`location` vs `city`, `high` vs `tempHigh`), on number encoding, and on
//! how a forecast day is dated. Normalization resolves all of that in one
//! pass, producing a strict snapshot the dashboard renders without any
//! further guessing:
//! - Multi-key fallbacks are applied once, at normalization time
//! - The forecast is truncated to three days, original order kept
//! - Absent fields stay absent and render as the `—` placeholder

pub mod snapshot;

pub use snapshot::{ForecastDay, WeatherSnapshot, MAX_FORECAST_DAYS};
