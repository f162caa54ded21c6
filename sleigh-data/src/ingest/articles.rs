//! Articles file: `article;weight;volume`.

use camino::Utf8Path;
use serde::Deserialize;
use sleigh_core::{Catalog, Item, ItemId};

use super::{decimal, read_csv_file};
use crate::DataError;

#[derive(Debug, Deserialize)]
struct ArticleRow {
    article: u32,
    #[serde(deserialize_with = "decimal::deserialize")]
    weight: f64,
    #[serde(deserialize_with = "decimal::deserialize")]
    volume: f64,
}

/// Load the item catalog.
///
/// # Errors
///
/// Returns [`DataError::Catalog`] when an article is listed twice or has a
/// negative size, alongside the open and CSV errors of any loader.
pub fn load_catalog(path: &Utf8Path) -> Result<Catalog, DataError> {
    let rows: Vec<ArticleRow> = read_csv_file(path)?;
    let items = rows
        .into_iter()
        .map(|row| Item::new(ItemId::new(row.article), row.weight, row.volume));
    Catalog::new(items).map_err(|source| DataError::Catalog {
        path: path.to_owned(),
        source,
    })
}
