//! Greedy single-vehicle route planner for sleigh deliveries.
//!
//! This crate provides [`GreedyPlanner`], the default implementation of the
//! [`Planner`](sleigh_core::Planner) trait. Starting at the depot, the planner
//! repeatedly drives to the nearest unserved recipient whose item is onboard.
//! When nothing onboard can be delivered it returns to the depot, and
//! [`CapacityLoader`] fills the empty vehicle for the outstanding demand.
//!
//! Recipients whose item can never fit the vehicle are dropped with a
//! [`PlanWarning`](sleigh_core::PlanWarning); a budget overrun is reported in
//! the response rather than as an error.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod loader;
mod planner;

pub use loader::CapacityLoader;
pub use planner::GreedyPlanner;
