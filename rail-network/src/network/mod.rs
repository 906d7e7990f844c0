//! The rail network and hub-routed journey planning.
//!
//! Journeys within a region are direct. Journeys between regions go via
//! the closest hub to the start (if the start is not itself a hub) and
//! the closest hub to the destination (likewise).

mod error;
mod journey;
mod quote;
mod rail_network;

#[cfg(test)]
mod network_tests;

pub use error::NetworkError;
pub use journey::{Journey, Leg};
pub use quote::{JourneyQuote, LegQuote};
pub use rail_network::RailNetwork;
