//! Geographic distance providers.
//!
//! This module provides the [`DistanceProvider`](sleigh_core::DistanceProvider)
//! implementations used outside tests:
//!
//! - [`GeodesicDistance`] measures along the WGS84 ellipsoid.
//! - [`HaversineDistance`] measures along a sphere of mean Earth radius. It is
//!   faster and within about half a percent of the geodesic figure.
//!
//! [`DistanceMethod`] names the two so configuration can pick one at runtime.
//!
//! # Example
//!
//! ```
//! use geo::Coord;
//! use sleigh_core::DistanceProvider;
//! use sleigh_data::routing::DistanceMethod;
//!
//! let method: DistanceMethod = "haversine".parse()?;
//! let north_pole = Coord { x: 0.0, y: 90.0 };
//! let equator = Coord { x: 0.0, y: 0.0 };
//! let km = method.distance_km(north_pole, equator);
//! assert!((km - 10_007.5).abs() < 1.0);
//! # Ok::<(), sleigh_data::routing::UnknownDistanceMethod>(())
//! ```

mod provider;

pub use provider::{DistanceMethod, GeodesicDistance, HaversineDistance, UnknownDistanceMethod};
