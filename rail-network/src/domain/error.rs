//! Station validation errors.
//!
//! A `Station` that fails any of these checks is never constructed.

use super::{Axis, InvalidCrs};

/// Errors raised while constructing a [`Station`](super::Station).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StationError {
    /// The station code is not 3 uppercase letters
    #[error(transparent)]
    InvalidCode(#[from] InvalidCrs),

    /// Latitude or longitude is out of range
    #[error("invalid {axis} {value}: must be between -{limit} and {limit}", limit = .axis.limit())]
    InvalidCoordinate { axis: Axis, value: f64 },
}
