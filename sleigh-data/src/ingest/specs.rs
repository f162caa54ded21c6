//! Vehicle specification file: `meta data;value` key/value rows.

use std::collections::HashMap;
use std::time::Duration;

use camino::Utf8Path;
use serde::Deserialize;
use sleigh_core::CapacityProfile;

use super::{decimal, read_csv_file};
use crate::DataError;

const MAX_WEIGHT: &str = "maximum weight";
const MAX_VOLUME: &str = "maximum volume";
const SPEED: &str = "speed (km/h)";
const STOP_MINUTES: &str = "time per stop (min)";

#[derive(Debug, Deserialize)]
struct SpecRow {
    #[serde(rename = "meta data")]
    key: String,
    #[serde(deserialize_with = "decimal::deserialize")]
    value: f64,
}

/// Vehicle figures read from the specification file.
#[derive(Debug, Clone, PartialEq)]
pub struct SleighSpecs {
    /// Maximum load weight per trip.
    pub max_weight: f64,
    /// Maximum load volume per trip.
    pub max_volume: f64,
    /// Travel speed in km/h.
    pub speed_kmh: f64,
    /// Service time per stop.
    pub stop_duration: Duration,
}

impl SleighSpecs {
    /// Combine the vehicle figures with a trip budget.
    #[must_use]
    pub const fn capacity_profile(&self, time_budget: Duration) -> CapacityProfile {
        CapacityProfile {
            max_weight: self.max_weight,
            max_volume: self.max_volume,
            speed_kmh: self.speed_kmh,
            stop_duration: self.stop_duration,
            time_budget,
        }
    }
}

/// Load the vehicle specification.
///
/// Unknown keys are ignored; when a key repeats, the last row wins.
///
/// # Errors
///
/// Returns [`DataError::MissingSpec`] when a required key is absent and
/// [`DataError::InvalidSpec`] when the stop time is negative or not finite.
pub fn load_sleigh_specs(path: &Utf8Path) -> Result<SleighSpecs, DataError> {
    let rows: Vec<SpecRow> = read_csv_file(path)?;
    let values: HashMap<String, f64> = rows.into_iter().map(|row| (row.key, row.value)).collect();
    let lookup = |key: &'static str| {
        values
            .get(key)
            .copied()
            .ok_or_else(|| DataError::MissingSpec {
                path: path.to_owned(),
                key,
            })
    };

    let stop_minutes = lookup(STOP_MINUTES)?;
    let stop_duration = minutes(stop_minutes).ok_or_else(|| DataError::InvalidSpec {
        path: path.to_owned(),
        key: STOP_MINUTES,
        value: stop_minutes,
    })?;

    Ok(SleighSpecs {
        max_weight: lookup(MAX_WEIGHT)?,
        max_volume: lookup(MAX_VOLUME)?,
        speed_kmh: lookup(SPEED)?,
        stop_duration,
    })
}

#[expect(
    clippy::float_arithmetic,
    reason = "minutes are converted to fractional seconds"
)]
fn minutes(value: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(value * 60.0).ok()
}
