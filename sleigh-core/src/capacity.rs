//! Vehicle capacity profile.

use std::time::Duration;

use thiserror::Error;

use crate::Footprint;

/// Limits of the single delivery vehicle for one run.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use sleigh_core::{CapacityProfile, Footprint};
///
/// let profile = CapacityProfile {
///     max_weight: 100.0,
///     max_volume: 50.0,
///     speed_kmh: 1_000.0,
///     stop_duration: Duration::from_secs(30),
///     time_budget: Duration::from_secs(7 * 3600),
/// };
/// assert!(profile.validate().is_ok());
/// assert!(profile.admits(&Footprint::new(100.0, 1.0)));
/// assert!(!profile.admits(&Footprint::new(100.5, 1.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapacityProfile {
    /// Maximum load weight per trip.
    pub max_weight: f64,
    /// Maximum load volume per trip.
    pub max_volume: f64,
    /// Travel speed in kilometres per hour.
    pub speed_kmh: f64,
    /// Fixed service time spent at every delivery stop.
    pub stop_duration: Duration,
    /// Total trip time budget.
    pub time_budget: Duration,
}

/// Errors returned by [`CapacityProfile::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CapacityProfileError {
    /// Maximum weight was zero, negative or not finite.
    #[error("maximum weight must be a positive finite number")]
    InvalidMaxWeight,
    /// Maximum volume was zero, negative or not finite.
    #[error("maximum volume must be a positive finite number")]
    InvalidMaxVolume,
    /// Speed was zero, negative or not finite.
    #[error("speed must be a positive finite number")]
    InvalidSpeed,
    /// The time budget was zero.
    #[error("time budget must be positive")]
    ZeroTimeBudget,
}

fn positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl CapacityProfile {
    /// Validate the profile before a run.
    pub fn validate(&self) -> Result<(), CapacityProfileError> {
        if !positive_finite(self.max_weight) {
            return Err(CapacityProfileError::InvalidMaxWeight);
        }
        if !positive_finite(self.max_volume) {
            return Err(CapacityProfileError::InvalidMaxVolume);
        }
        if !positive_finite(self.speed_kmh) {
            return Err(CapacityProfileError::InvalidSpeed);
        }
        if self.time_budget.is_zero() {
            return Err(CapacityProfileError::ZeroTimeBudget);
        }
        Ok(())
    }

    /// Whether a single unit of `footprint` fits into the empty vehicle.
    #[must_use]
    pub fn admits(&self, footprint: &Footprint) -> bool {
        footprint.weight <= self.max_weight && footprint.volume <= self.max_volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn base_profile() -> CapacityProfile {
        CapacityProfile {
            max_weight: 10.0,
            max_volume: 5.0,
            speed_kmh: 60.0,
            stop_duration: Duration::from_secs(60),
            time_budget: Duration::from_secs(3600),
        }
    }

    #[fixture]
    fn profile() -> CapacityProfile {
        base_profile()
    }

    #[rstest]
    fn accepts_sane_profile(profile: CapacityProfile) {
        assert_eq!(profile.validate(), Ok(()));
    }

    #[rstest]
    #[case::zero_weight(CapacityProfile { max_weight: 0.0, ..base_profile() }, CapacityProfileError::InvalidMaxWeight)]
    #[case::nan_volume(CapacityProfile { max_volume: f64::NAN, ..base_profile() }, CapacityProfileError::InvalidMaxVolume)]
    #[case::negative_speed(CapacityProfile { speed_kmh: -1.0, ..base_profile() }, CapacityProfileError::InvalidSpeed)]
    #[case::zero_budget(CapacityProfile { time_budget: Duration::ZERO, ..base_profile() }, CapacityProfileError::ZeroTimeBudget)]
    fn rejects_invalid_profiles(
        #[case] candidate: CapacityProfile,
        #[case] expected: CapacityProfileError,
    ) {
        assert_eq!(candidate.validate(), Err(expected));
    }

    #[rstest]
    #[case(Footprint::new(10.0, 5.0), true)]
    #[case(Footprint::new(10.1, 1.0), false)]
    #[case(Footprint::new(1.0, 5.1), false)]
    fn admits_compares_each_dimension(
        profile: CapacityProfile,
        #[case] footprint: Footprint,
        #[case] expected: bool,
    ) {
        assert_eq!(profile.admits(&footprint), expected);
    }
}
