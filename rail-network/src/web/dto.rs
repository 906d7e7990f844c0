//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Station;
use crate::network::{JourneyQuote, LegQuote};

/// Query for hub stations.
#[derive(Debug, Deserialize)]
pub struct HubsRequest {
    /// Only list hubs in this region
    pub region: Option<String>,
}

/// Query for the closest hub to a station.
#[derive(Debug, Deserialize)]
pub struct ClosestHubRequest {
    /// Station CRS code
    pub station: String,
}

/// Query for a journey between two stations.
#[derive(Debug, Deserialize)]
pub struct JourneyRequest {
    /// Start station CRS code
    pub from: String,

    /// Destination station CRS code
    pub to: String,
}

/// Query for fares from every station to one destination.
#[derive(Debug, Deserialize)]
pub struct FaresRequest {
    /// Destination station CRS code
    pub to: String,
}

/// A station as returned by the API.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub crs: String,
    pub name: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub is_hub: bool,
}

/// Response listing regions.
#[derive(Debug, Serialize)]
pub struct RegionsResponse {
    /// Region names in first-seen order
    pub regions: Vec<String>,
}

/// Response listing every station.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub count: usize,
    pub stations: Vec<StationResult>,
}

/// Response listing hub stations.
#[derive(Debug, Serialize)]
pub struct HubsResponse {
    pub hubs: Vec<StationResult>,
}

/// One priced leg of a journey.
#[derive(Debug, Serialize)]
pub struct LegResult {
    /// CRS code the leg departs from
    pub from: String,

    /// CRS code the leg arrives at
    pub to: String,

    pub distance_km: f64,
    pub crosses_region: bool,

    /// Hubs in the region the leg arrives in
    pub dest_region_hubs: usize,

    pub fare: f64,
}

/// A planned and priced journey.
#[derive(Debug, Serialize)]
pub struct JourneyResult {
    /// Stops in travel order
    pub stops: Vec<StationResult>,

    /// Legs between consecutive stops
    pub legs: Vec<LegResult>,

    /// Sum of the leg distances (km)
    pub total_distance_km: f64,

    /// Sum of the leg fares
    pub total_fare: f64,

    /// Plain-text summary
    pub summary: String,
}

/// Fare from one station to the requested destination.
#[derive(Debug, Serialize)]
pub struct FareResult {
    pub crs: String,
    pub name: String,
    pub fare: f64,
}

/// Response for fares to a destination.
#[derive(Debug, Serialize)]
pub struct FaresResponse {
    pub destination: StationResult,
    pub fares: Vec<FareResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            crs: station.crs().to_string(),
            name: station.name().to_string(),
            region: station.region().to_string(),
            latitude: station.latitude(),
            longitude: station.longitude(),
            is_hub: station.is_hub(),
        }
    }
}

impl LegResult {
    /// Create from a priced leg.
    pub fn from_quote(leg: &LegQuote<'_>) -> Self {
        Self {
            from: leg.from.crs().to_string(),
            to: leg.to.crs().to_string(),
            distance_km: leg.distance_km,
            crosses_region: leg.crosses_region,
            dest_region_hubs: leg.dest_region_hubs,
            fare: leg.fare,
        }
    }
}

impl JourneyResult {
    /// Create from a journey quote.
    pub fn from_quote(quote: &JourneyQuote<'_>) -> Self {
        Self {
            stops: quote
                .journey()
                .stops()
                .iter()
                .map(|s| StationResult::from_station(s))
                .collect(),
            legs: quote.legs().iter().map(LegResult::from_quote).collect(),
            total_distance_km: quote.journey().distance_km(),
            total_fare: quote.total(),
            summary: quote.to_string(),
        }
    }
}

impl FareResult {
    pub fn new(station: &Station, fare: f64) -> Self {
        Self {
            crs: station.crs().to_string(),
            name: station.name().to_string(),
            fare,
        }
    }
}
