//! Ellipsoidal and spherical `DistanceProvider` implementations.

use std::fmt;
use std::str::FromStr;

use geo::{Coord, Distance, Geodesic, Haversine, Point};
use serde::{Deserialize, Serialize};
use sleigh_core::DistanceProvider;
use thiserror::Error;

#[expect(
    clippy::float_arithmetic,
    reason = "geo reports metres; the planner works in kilometres"
)]
fn metres_to_km(metres: f64) -> f64 {
    metres / 1_000.0
}

/// Distance along the WGS84 ellipsoid (Karney's algorithm).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GeodesicDistance;

impl DistanceProvider for GeodesicDistance {
    fn distance_km(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        metres_to_km(Geodesic.distance(Point::from(from), Point::from(to)))
    }
}

/// Great-circle distance on a sphere of mean Earth radius.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HaversineDistance;

impl DistanceProvider for HaversineDistance {
    fn distance_km(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        metres_to_km(Haversine.distance(Point::from(from), Point::from(to)))
    }
}

/// Runtime choice of distance provider.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMethod {
    /// [`GeodesicDistance`].
    #[default]
    Geodesic,
    /// [`HaversineDistance`].
    Haversine,
}

impl DistanceMethod {
    /// Lowercase name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Geodesic => "geodesic",
            Self::Haversine => "haversine",
        }
    }
}

impl DistanceProvider for DistanceMethod {
    fn distance_km(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        match self {
            Self::Geodesic => GeodesicDistance.distance_km(from, to),
            Self::Haversine => HaversineDistance.distance_km(from, to),
        }
    }
}

impl fmt::Display for DistanceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised distance method name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown distance method `{0}`; expected `geodesic` or `haversine`")]
pub struct UnknownDistanceMethod(pub String);

impl FromStr for DistanceMethod {
    type Err = UnknownDistanceMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "geodesic" => Ok(Self::Geodesic),
            "haversine" => Ok(Self::Haversine),
            _ => Err(UnknownDistanceMethod(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const NORTH_POLE: Coord<f64> = Coord { x: 0.0, y: 90.0 };
    const BERLIN: Coord<f64> = Coord { x: 13.405, y: 52.52 };
    const PARIS: Coord<f64> = Coord { x: 2.3522, y: 48.8566 };

    #[rstest]
    #[case(DistanceMethod::Geodesic, 10_001.97)]
    #[case(DistanceMethod::Haversine, 10_007.54)]
    fn pole_to_equator(#[case] method: DistanceMethod, #[case] expected_km: f64) {
        let km = method.distance_km(NORTH_POLE, Coord { x: 0.0, y: 0.0 });
        assert!((km - expected_km).abs() < 0.1, "got {km}");
    }

    #[rstest]
    fn methods_agree_closely_between_cities() {
        let geodesic = GeodesicDistance.distance_km(BERLIN, PARIS);
        let haversine = HaversineDistance.distance_km(BERLIN, PARIS);
        assert!((geodesic - 878.0).abs() < 5.0, "got {geodesic}");
        assert!((geodesic - haversine).abs() / geodesic < 0.005);
    }

    #[rstest]
    fn distance_is_symmetric_and_zero_on_self() {
        let there = GeodesicDistance.distance_km(BERLIN, PARIS);
        let back = GeodesicDistance.distance_km(PARIS, BERLIN);
        assert!((there - back).abs() < 1e-6);
        assert!(GeodesicDistance.distance_km(BERLIN, BERLIN).abs() < 1e-9);
    }

    #[rstest]
    #[case("geodesic", Ok(DistanceMethod::Geodesic))]
    #[case("Haversine", Ok(DistanceMethod::Haversine))]
    #[case("manhattan", Err(UnknownDistanceMethod("manhattan".to_owned())))]
    fn parses_method_names(
        #[case] raw: &str,
        #[case] expected: Result<DistanceMethod, UnknownDistanceMethod>,
    ) {
        assert_eq!(raw.parse::<DistanceMethod>(), expected);
    }

    #[rstest]
    fn display_round_trips_through_parse() {
        for method in [DistanceMethod::Geodesic, DistanceMethod::Haversine] {
            assert_eq!(method.to_string().parse::<DistanceMethod>(), Ok(method));
        }
    }
}
