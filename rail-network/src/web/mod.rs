//! Web layer for the rail fare service.
//!
//! Exposes the network's query surface over HTTP as JSON, with HTML
//! renderings of the overview and journey summary.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
