//! Network construction and query errors.

use crate::domain::Crs;

/// Errors raised by [`RailNetwork`](super::RailNetwork).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// Two or more input stations share a code; the network is not built
    #[error("duplicate CRS code {0}: codes must be unique within a network")]
    DuplicateCode(Crs),

    /// A query referenced a station whose code is not in the network
    #[error("station {0} is not on this network")]
    NotInNetwork(Crs),

    /// A hub lookup found no hubs in the region
    #[error("no hubs exist in region '{0}'")]
    NoHubInRegion(String),
}
