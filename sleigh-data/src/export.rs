//! Route export in the semicolon CSV dialect.
//!
//! The file has the header `stop;article;pieces`. A delivery is written as
//! `<recipient>;;`. A reload writes one `0;<article>;<count>` row per loaded
//! item in ascending item order, and a plain depot return writes `0;;`.

use std::io::Write;

use camino::Utf8Path;
use sleigh_core::{Route, RouteEvent};

use crate::DataError;
use crate::fs::create_utf8_file;
use crate::ingest::DELIMITER;

const DEPOT_STOP: &str = "0";

/// Counts describing an exported route file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportSummary {
    /// Data rows written, excluding the header.
    pub rows: usize,
    /// Delivery rows.
    pub deliveries: usize,
    /// Reloads that loaded at least one item.
    pub refills: usize,
}

/// Write `route` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`DataError::Open`] when the file cannot be created and
/// [`DataError::Csv`] when writing fails.
pub fn write_route(path: &Utf8Path, route: &Route) -> Result<ExportSummary, DataError> {
    let file = create_utf8_file(path).map_err(|source| DataError::open(path, source))?;
    let summary = write_route_to(file, route).map_err(|source| DataError::csv(path, source))?;
    log::info!(
        "wrote {} rows ({} deliveries, {} refills) to {path}",
        summary.rows,
        summary.deliveries,
        summary.refills
    );
    Ok(summary)
}

/// Write `route` as CSV to any writer.
///
/// # Errors
///
/// Returns the underlying CSV or I/O error.
pub fn write_route_to<W: Write>(writer: W, route: &Route) -> Result<ExportSummary, csv::Error> {
    let mut csv = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(writer);
    csv.write_record(["stop", "article", "pieces"])?;

    let mut summary = ExportSummary::default();
    for event in route.events() {
        match event {
            RouteEvent::Delivery { recipient, .. } => {
                csv.write_record([recipient.to_string().as_str(), "", ""])?;
                summary.rows += 1;
                summary.deliveries += 1;
            }
            RouteEvent::Reload { manifest } if manifest.is_empty() => {
                csv.write_record([DEPOT_STOP, "", ""])?;
                summary.rows += 1;
            }
            RouteEvent::Reload { manifest } => {
                for (item, count) in manifest.iter() {
                    csv.write_record([
                        DEPOT_STOP,
                        item.to_string().as_str(),
                        count.to_string().as_str(),
                    ])?;
                    summary.rows += 1;
                }
                summary.refills += 1;
            }
        }
    }
    csv.flush()?;
    Ok(summary)
}
