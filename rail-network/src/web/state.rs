//! Application state for the web layer.

use std::sync::Arc;

use crate::network::RailNetwork;

/// Shared application state.
///
/// The network is read-only once loaded, so handlers share it without locks.
#[derive(Clone)]
pub struct AppState {
    pub network: Arc<RailNetwork>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: RailNetwork) -> Self {
        Self {
            network: Arc::new(network),
        }
    }
}
