//! The station collection and its queries.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use super::{Journey, JourneyQuote, LegQuote, NetworkError};
use crate::domain::{Crs, Station};
use crate::fare::FareModel;

/// An immutable collection of stations keyed by CRS code.
///
/// Stations keep the order they were supplied in; every query that scans
/// the network (region listing, hub lookup, tie-breaking) uses that order.
/// All queries take `&self` and return fresh values, so a network can be
/// shared between threads without locking.
#[derive(Debug, Clone)]
pub struct RailNetwork {
    stations: Vec<Station>,
    index: HashMap<Crs, usize>,
    fare_model: FareModel,
}

impl RailNetwork {
    /// Builds a network priced with the default [`FareModel`].
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::DuplicateCode`] if two stations share a code.
    pub fn new(stations: impl IntoIterator<Item = Station>) -> Result<Self, NetworkError> {
        Self::with_fare_model(stations, FareModel::default())
    }

    /// Builds a network priced with `fare_model`.
    pub fn with_fare_model(
        stations: impl IntoIterator<Item = Station>,
        fare_model: FareModel,
    ) -> Result<Self, NetworkError> {
        let stations: Vec<Station> = stations.into_iter().collect();
        let mut index = HashMap::with_capacity(stations.len());

        for (i, station) in stations.iter().enumerate() {
            if index.insert(station.crs(), i).is_some() {
                return Err(NetworkError::DuplicateCode(station.crs()));
            }
        }

        let network = Self {
            stations,
            index,
            fare_model,
        };
        debug!(
            stations = network.station_count(),
            regions = network.regions().len(),
            hubs = network.hub_stations(None).len(),
            "built rail network"
        );
        Ok(network)
    }

    /// The fare model legs are priced with.
    pub fn fare_model(&self) -> &FareModel {
        &self.fare_model
    }

    /// Look up a station by code.
    pub fn station(&self, crs: &Crs) -> Option<&Station> {
        self.index.get(crs).map(|&i| &self.stations[i])
    }

    /// Returns true if a station with this code is in the network.
    pub fn contains(&self, crs: &Crs) -> bool {
        self.index.contains_key(crs)
    }

    /// All stations, in insertion order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Number of stations in the network.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Distinct region names in the order they are first seen.
    pub fn regions(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.stations
            .iter()
            .map(Station::region)
            .filter(|region| seen.insert(*region))
            .collect()
    }

    /// Hub stations, optionally restricted to one region.
    ///
    /// An unknown region simply yields no hubs.
    pub fn hub_stations(&self, region: Option<&str>) -> Vec<&Station> {
        self.stations
            .iter()
            .filter(|s| s.is_hub())
            .filter(|s| region.is_none_or(|r| s.region() == r))
            .collect()
    }

    /// Number of hubs in `region`.
    pub fn hub_count(&self, region: &str) -> usize {
        self.stations
            .iter()
            .filter(|s| s.is_hub() && s.region() == region)
            .count()
    }

    /// The hub in `station`'s region nearest to it.
    ///
    /// Membership is by code only; the region and position searched from
    /// are those of the `station` passed in, the same fields
    /// [`journey_planner`](Self::journey_planner) compares regions with.
    /// Equidistant hubs resolve to whichever comes first in the network.
    /// A hub is its own closest hub.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::NotInNetwork`] if no station has `station`'s code
    /// - [`NetworkError::NoHubInRegion`] if its region has no hubs
    pub fn closest_hub(&self, station: &Station) -> Result<&Station, NetworkError> {
        if !self.contains(&station.crs()) {
            return Err(NetworkError::NotInNetwork(station.crs()));
        }

        let mut best: Option<(&Station, f64)> = None;
        for hub in self
            .stations
            .iter()
            .filter(|s| s.is_hub() && s.shares_region_with(station))
        {
            let distance = hub.distance_to(station);
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((hub, distance));
            }
        }

        let (hub, distance) =
            best.ok_or_else(|| NetworkError::NoHubInRegion(station.region().to_string()))?;
        trace!(
            station = %station.crs(),
            hub = %hub.crs(),
            distance_km = distance,
            "closest hub"
        );
        Ok(hub)
    }

    /// Plans a route from `start` to `dest`.
    ///
    /// Stations in the same region are joined directly. Otherwise the route
    /// runs through the closest hub of each end, skipping a hub that is the
    /// end station itself. Regions and positions are read from `start` and
    /// `dest` as given, not from the network's records for their codes.
    ///
    /// # Errors
    ///
    /// Propagates [`closest_hub`](Self::closest_hub) failures for
    /// cross-region journeys.
    pub fn journey_planner<'a>(
        &'a self,
        start: &'a Station,
        dest: &'a Station,
    ) -> Result<Journey<'a>, NetworkError> {
        if start.shares_region_with(dest) {
            return Ok(Journey::direct(start, dest));
        }

        let start_hub = self.closest_hub(start)?;
        let dest_hub = self.closest_hub(dest)?;
        Ok(Journey::via_hubs(start, start_hub, dest_hub, dest))
    }

    /// Plans a route and prices each leg.
    ///
    /// A leg's hub surcharge counts the hubs of the region that leg arrives
    /// in, which for the first leg of a three-leg journey is the start
    /// region.
    pub fn journey_quote<'a>(
        &'a self,
        start: &'a Station,
        dest: &'a Station,
    ) -> Result<JourneyQuote<'a>, NetworkError> {
        let journey = self.journey_planner(start, dest)?;
        let legs = journey
            .legs()
            .map(|leg| {
                let distance_km = leg.distance_km();
                let crosses_region = leg.crosses_region();
                let dest_region_hubs = self.hub_count(leg.to.region());
                let fare = self
                    .fare_model
                    .price(distance_km, crosses_region, dest_region_hubs);
                trace!(
                    from = %leg.from.crs(),
                    to = %leg.to.crs(),
                    distance_km,
                    crosses_region,
                    dest_region_hubs,
                    fare,
                    "priced leg"
                );
                LegQuote {
                    from: leg.from,
                    to: leg.to,
                    distance_km,
                    crosses_region,
                    dest_region_hubs,
                    fare,
                }
            })
            .collect();

        Ok(JourneyQuote::new(journey, legs))
    }

    /// Total fare from `start` to `dest`: the sum of the leg fares.
    pub fn journey_fare(&self, start: &Station, dest: &Station) -> Result<f64, NetworkError> {
        Ok(self.journey_quote(start, dest)?.total())
    }

    /// The fare from every station in the network to `dest`, in network
    /// order. The destination itself is included (a zero-length journey).
    pub fn fares_to(&self, dest: &Crs) -> Result<Vec<(&Station, f64)>, NetworkError> {
        let dest = self.station(dest).ok_or(NetworkError::NotInNetwork(*dest))?;
        self.stations
            .iter()
            .map(|start| self.journey_fare(start, dest).map(|fare| (start, fare)))
            .collect()
    }
}
