//! Loaders for the semicolon-separated reference files.
//!
//! Every file has a header row, uses `;` between fields and writes floats
//! with a decimal comma. A plain decimal point is accepted as well.

use std::io::{BufReader, Read};

use camino::Utf8Path;
use serde::de::DeserializeOwned;

use crate::DataError;
use crate::fs::open_utf8_file;

mod articles;
mod decimal;
mod recipients;
mod specs;

pub use articles::load_catalog;
pub use recipients::load_recipients;
pub use specs::{SleighSpecs, load_sleigh_specs};

/// Field separator shared by every file.
pub(crate) const DELIMITER: u8 = b';';

/// Deserialize every record of a semicolon CSV stream.
pub(crate) fn read_csv_entries<T, R>(reader: R) -> Result<Vec<T>, csv::Error>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(reader));
    reader.deserialize().collect()
}

/// Open `path` and deserialize its records, attaching the path to errors.
pub(crate) fn read_csv_file<T>(path: &Utf8Path) -> Result<Vec<T>, DataError>
where
    T: DeserializeOwned,
{
    let file = open_utf8_file(path).map_err(|source| DataError::open(path, source))?;
    let entries = read_csv_entries(file).map_err(|source| DataError::csv(path, source))?;
    log::debug!("read {} records from {path}", entries.len());
    Ok(entries)
}
