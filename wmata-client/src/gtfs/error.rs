//! Static GTFS data error types.

use std::path::PathBuf;

use crate::domain::StationCode;

/// Errors from the static GTFS data layer.
#[derive(Debug, thiserror::Error)]
pub enum GtfsError {
    /// The stops reference file has not been downloaded
    #[error("no rail stops file at {0}; rebuild the GTFS static data first")]
    MissingStops(PathBuf),

    /// No station matched the given name, even fuzzily
    #[error("no station found matching name: {0}")]
    UnknownStation(String),

    /// No station has the given code
    #[error("no station found for code: {0}")]
    UnknownCode(StationCode),

    /// A station-level row whose identifier does not end in a valid code
    #[error("malformed station stop_id: {0}")]
    MalformedStopId(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed stops table
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Archive download failed
    #[error(transparent)]
    Api(#[from] crate::api::ApiError),

    /// Archive extraction failed
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}
