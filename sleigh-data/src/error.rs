//! Errors raised while reading reference data or writing routes.

use std::io;

use camino::Utf8PathBuf;
use sleigh_core::CatalogError;
use thiserror::Error;

/// Errors returned by the loaders and the route exporter.
#[derive(Debug, Error)]
pub enum DataError {
    /// The file could not be opened or created.
    #[error("failed to open {path}")]
    Open {
        /// File being accessed.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A row could not be read, parsed or written.
    #[error("malformed CSV in {path}")]
    Csv {
        /// File being processed.
        path: Utf8PathBuf,
        /// Underlying CSV failure, carrying the record position.
        #[source]
        source: csv::Error,
    },
    /// The articles file does not form a valid catalog.
    #[error("invalid catalog in {path}")]
    Catalog {
        /// Articles file.
        path: Utf8PathBuf,
        /// Catalog validation failure.
        #[source]
        source: CatalogError,
    },
    /// A required vehicle specification key is absent.
    #[error("{path} does not define `{key}`")]
    MissingSpec {
        /// Specification file.
        path: Utf8PathBuf,
        /// Missing key.
        key: &'static str,
    },
    /// A vehicle specification value cannot be used.
    #[error("`{key}` in {path} has unusable value {value}")]
    InvalidSpec {
        /// Specification file.
        path: Utf8PathBuf,
        /// Offending key.
        key: &'static str,
        /// Parsed value.
        value: f64,
    },
}

impl DataError {
    pub(crate) fn open(path: impl Into<Utf8PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<Utf8PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}
