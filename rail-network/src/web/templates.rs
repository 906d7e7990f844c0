//! Askama templates for the web frontend.

use askama::Template;

use crate::network::{JourneyQuote, RailNetwork};

/// Network overview page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub station_count: usize,
    pub regions: Vec<RegionView>,
}

/// Journey summary fragment.
#[derive(Template)]
#[template(path = "journey.html")]
pub struct JourneyTemplate {
    pub journey: JourneyView,
}

/// A region and its hubs.
#[derive(Debug, Clone)]
pub struct RegionView {
    pub name: String,
    pub station_count: usize,
    pub hubs: Vec<StopView>,
}

/// A station reference for display.
#[derive(Debug, Clone)]
pub struct StopView {
    pub crs: String,
    pub name: String,
}

/// A priced leg for display.
#[derive(Debug, Clone)]
pub struct LegView {
    pub from: String,
    pub to: String,
    pub distance: String,
    pub crosses_region: bool,
    pub fare: String,
}

/// Journey view model for templates.
#[derive(Debug, Clone)]
pub struct JourneyView {
    pub origin: StopView,
    pub destination: StopView,
    pub interchanges: Vec<StopView>,
    pub legs: Vec<LegView>,
    pub total_distance: String,
    pub total_fare: String,
}

impl IndexTemplate {
    /// Summarise a network region by region.
    pub fn from_network(network: &RailNetwork) -> Self {
        let regions = network
            .regions()
            .into_iter()
            .map(|region| RegionView {
                name: region.to_string(),
                station_count: network
                    .stations()
                    .iter()
                    .filter(|s| s.region() == region)
                    .count(),
                hubs: network
                    .hub_stations(Some(region))
                    .into_iter()
                    .map(|s| StopView {
                        crs: s.crs().to_string(),
                        name: s.name().to_string(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            station_count: network.station_count(),
            regions,
        }
    }
}

impl JourneyView {
    /// Create from a journey quote.
    pub fn from_quote(quote: &JourneyQuote<'_>) -> Self {
        let stop = |s: &crate::domain::Station| StopView {
            crs: s.crs().to_string(),
            name: s.name().to_string(),
        };
        let journey = quote.journey();

        Self {
            origin: stop(journey.origin()),
            destination: stop(journey.destination()),
            interchanges: journey.interchanges().iter().copied().map(stop).collect(),
            legs: quote
                .legs()
                .iter()
                .map(|leg| LegView {
                    from: leg.from.crs().to_string(),
                    to: leg.to.crs().to_string(),
                    distance: format!("{:.1} km", leg.distance_km),
                    crosses_region: leg.crosses_region,
                    fare: format!("£{:.2}", leg.fare),
                })
                .collect(),
            total_distance: format!("{:.1} km", journey.distance_km()),
            total_fare: format!("£{:.2}", quote.total()),
        }
    }
}
