//! Shared test harness modules for the sleigh CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use crate::plan::{PlanArgs, PlanConfig, config_from_layers_for_test, execute_plan, run_plan_with};

mod helpers;
