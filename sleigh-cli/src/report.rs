//! Human-readable summary of a planning run.

use std::io::{self, Write};
use std::time::Duration;

use sleigh_core::PlanWarning;

use crate::plan::PlanOutcome;

#[expect(
    clippy::float_arithmetic,
    reason = "durations are reported in fractional hours"
)]
fn hours(duration: Duration) -> f64 {
    duration.as_secs_f64() / 3600.0
}

#[expect(
    clippy::float_arithmetic,
    reason = "stop time is reported in fractional minutes"
)]
fn minutes(duration: Duration) -> f64 {
    duration.as_secs_f64() / 60.0
}

/// Write the run summary to `writer`.
pub(crate) fn write_summary(writer: &mut dyn Write, outcome: &PlanOutcome) -> io::Result<()> {
    let specs = &outcome.specs;
    writeln!(
        writer,
        "sleigh: max weight {}, max volume {}, speed {} km/h, {} min per stop",
        specs.max_weight,
        specs.max_volume,
        specs.speed_kmh,
        minutes(specs.stop_duration)
    )?;
    writeln!(writer, "recipients: {}", outcome.recipients)?;
    writeln!(
        writer,
        "route: {} rows written to {}",
        outcome.export.rows, outcome.output
    )?;

    let stats = &outcome.statistics;
    writeln!(
        writer,
        "deliveries: {} ({} eligible, {} fallback)",
        stats.stops, stats.eligible_deliveries, stats.fallback_deliveries
    )?;
    writeln!(writer, "refills: {}", stats.refills)?;
    writeln!(writer, "distance: {:.1} km", stats.total_distance_km)?;
    writeln!(
        writer,
        "time: {:.2} h of {:.2} h budget",
        hours(outcome.response.elapsed()),
        hours(outcome.time_budget)
    )?;

    match outcome.response.budget.required_speed_kmh {
        Some(speed) => writeln!(
            writer,
            "budget: exceeded; a speed of {speed:.1} km/h would be required"
        )?,
        None => writeln!(writer, "budget: within limit")?,
    }

    for warning in &outcome.response.warnings {
        match warning {
            PlanWarning::Undeliverable {
                recipient,
                item,
                footprint,
            } => writeln!(
                writer,
                "warning: recipient {recipient} cannot be served; item {item} \
                 (weight {}, volume {}) exceeds the sleigh capacity",
                footprint.weight, footprint.volume
            )?,
        }
    }
    Ok(())
}
