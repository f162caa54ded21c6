//! Travel distance between geographic coordinates.
//!
//! The [`DistanceProvider`] trait is the planner's only view of geography.
//! Concrete providers (geodesic, haversine) live with the data tooling;
//! tests use the planar double from `test_support`.

mod provider;

pub use provider::DistanceProvider;
