//! Domain types for the rail network.
//!
//! All types enforce their invariants at construction time, so code that
//! receives a `Station` can trust its code and coordinates.

mod crs;
mod error;
mod location;
mod station;

pub use crs::{Crs, CrsDefect, InvalidCrs};
pub use error::StationError;
pub use location::{Axis, EARTH_RADIUS_KM, Location};
pub use station::Station;
