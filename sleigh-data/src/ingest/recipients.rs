//! Recipients file: `child;latitude;longitude;wish;naughty`.

use camino::Utf8Path;
use geo::Coord;
use serde::Deserialize;
use sleigh_core::{ItemId, Recipient, RecipientId};

use super::{decimal, read_csv_file};
use crate::DataError;

#[derive(Debug, Deserialize)]
struct RecipientRow {
    child: u64,
    #[serde(deserialize_with = "decimal::deserialize")]
    latitude: f64,
    #[serde(deserialize_with = "decimal::deserialize")]
    longitude: f64,
    wish: u32,
    naughty: u8,
}

impl From<RecipientRow> for Recipient {
    fn from(row: RecipientRow) -> Self {
        Self::new(
            RecipientId::new(row.child),
            Coord {
                x: row.longitude,
                y: row.latitude,
            },
            row.naughty == 0,
            ItemId::new(row.wish),
        )
    }
}

/// Load recipients in file order.
///
/// A recipient is eligible for their wish when `naughty` is `0`.
///
/// # Errors
///
/// Returns [`DataError::Open`] when the file cannot be opened and
/// [`DataError::Csv`] when a row is malformed.
pub fn load_recipients(path: &Utf8Path) -> Result<Vec<Recipient>, DataError> {
    let rows: Vec<RecipientRow> = read_csv_file(path)?;
    Ok(rows.into_iter().map(Recipient::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::read_csv_entries;
    use rstest::rstest;

    #[rstest]
    fn parses_decimal_comma_rows() {
        let input = "child;latitude;longitude;wish;naughty\n\
                     7;52,52;13,405;3;0\n\
                     9;48.85;2.35;4;1\n";
        let rows: Vec<RecipientRow> = read_csv_entries(input.as_bytes()).expect("valid rows");
        let recipients: Vec<Recipient> = rows.into_iter().map(Recipient::from).collect();

        let first = recipients.first().expect("first row");
        assert_eq!(first.id, RecipientId::new(7));
        assert!(first.eligible);
        assert_eq!(first.requested_item, ItemId::new(3));
        assert!((first.location.y - 52.52).abs() < 1e-12);
        assert!((first.location.x - 13.405).abs() < 1e-12);

        let second = recipients.get(1).expect("second row");
        assert!(!second.eligible);
    }

    #[rstest]
    fn rejects_non_numeric_coordinates() {
        let input = "child;latitude;longitude;wish;naughty\n1;north;0;1;0\n";
        let result: Result<Vec<RecipientRow>, _> = read_csv_entries(input.as_bytes());
        assert!(result.is_err());
    }
}
