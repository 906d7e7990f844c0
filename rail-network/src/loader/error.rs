//! Loader error types.

use std::path::PathBuf;

use crate::domain::StationError;
use crate::network::NetworkError;

/// Errors that can occur while loading a network from CSV.
///
/// Row-level failures carry the CRS code as written in the offending row.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The CSV itself is malformed (bad quoting, ragged rows, bad UTF-8)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required header is absent
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    /// Latitude or longitude does not parse as a number
    #[error("{column} '{value}' for station {crs} is not a number")]
    InvalidCoordinate {
        crs: String,
        column: &'static str,
        value: String,
    },

    /// The hub column is not a recognisable boolean
    #[error("hub flag '{value}' for station {crs} is not a boolean")]
    InvalidHubFlag { crs: String, value: String },

    /// The row parsed but does not describe a valid station
    #[error("station {crs}: {source}")]
    Station { crs: String, source: StationError },

    /// The stations do not form a valid network
    #[error(transparent)]
    Network(#[from] NetworkError),
}
