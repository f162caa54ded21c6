//! Distance provider trait for coordinate pairs.

use geo::Coord;

/// Compute the travel distance between two coordinates.
///
/// Implementations must be pure: the same pair always yields the same
/// finite, non-negative distance in kilometres. Coordinates use
/// `x = longitude` and `y = latitude`.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use sleigh_core::DistanceProvider;
///
/// struct Manhattan;
///
/// impl DistanceProvider for Manhattan {
///     fn distance_km(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
///         (from.x - to.x).abs() + (from.y - to.y).abs()
///     }
/// }
///
/// let km = Manhattan.distance_km(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 });
/// assert_eq!(km, 7.0);
/// ```
pub trait DistanceProvider: Send + Sync {
    /// Distance from `from` to `to` in kilometres.
    fn distance_km(&self, from: Coord<f64>, to: Coord<f64>) -> f64;
}

impl<T> DistanceProvider for &T
where
    T: DistanceProvider + ?Sized,
{
    fn distance_km(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        (**self).distance_km(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::test_support::PlanarDistance;

    #[rstest]
    #[case(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 }, 5.0)]
    #[case(Coord { x: 1.0, y: 1.0 }, Coord { x: 1.0, y: 1.0 }, 0.0)]
    fn planar_distance_is_euclidean(
        #[case] from: Coord<f64>,
        #[case] to: Coord<f64>,
        #[case] expected: f64,
    ) {
        let km = PlanarDistance.distance_km(from, to);
        assert!((km - expected).abs() < 1e-12);
    }

    #[rstest]
    fn references_delegate() {
        let provider = PlanarDistance;
        let by_ref: &dyn DistanceProvider = &provider;
        let km = by_ref.distance_km(Coord { x: 0.0, y: 0.0 }, Coord { x: 0.0, y: 2.0 });
        assert!((km - 2.0).abs() < 1e-12);
    }
}
