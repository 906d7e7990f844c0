//! Journey types.
//!
//! A `Journey` is the ordered list of stations a passenger passes through:
//! the start, up to two hubs, and the destination.

use crate::domain::Station;

/// One consecutive pair of stations in a journey.
#[derive(Debug, Clone, Copy)]
pub struct Leg<'a> {
    pub from: &'a Station,
    pub to: &'a Station,
}

impl Leg<'_> {
    /// Great-circle length of the leg in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.from.distance_to(self.to)
    }

    /// Returns true if the leg ends in a different region to where it began.
    pub fn crosses_region(&self) -> bool {
        !self.from.shares_region_with(self.to)
    }
}

/// A planned route between two stations.
///
/// # Invariants
///
/// - At least two stops
/// - First stop is the start, last stop is the destination
#[derive(Debug, Clone, PartialEq)]
pub struct Journey<'a> {
    stops: Vec<&'a Station>,
}

impl<'a> Journey<'a> {
    /// A journey straight from `start` to `dest`.
    pub(crate) fn direct(start: &'a Station, dest: &'a Station) -> Self {
        Self {
            stops: vec![start, dest],
        }
    }

    /// A journey routed through hubs.
    ///
    /// A hub is only added as a stop when it differs (by code) from the
    /// station it serves, so a start or destination that is its own closest
    /// hub appears once.
    pub(crate) fn via_hubs(
        start: &'a Station,
        start_hub: &'a Station,
        dest_hub: &'a Station,
        dest: &'a Station,
    ) -> Self {
        let mut stops = vec![start];
        if start_hub != start {
            stops.push(start_hub);
        }
        if dest_hub != dest {
            stops.push(dest_hub);
        }
        stops.push(dest);
        Self { stops }
    }

    /// All stops in travel order.
    pub fn stops(&self) -> &[&'a Station] {
        &self.stops
    }

    /// The station the journey starts from.
    pub fn origin(&self) -> &'a Station {
        self.stops[0]
    }

    /// The station the journey ends at.
    pub fn destination(&self) -> &'a Station {
        self.stops[self.stops.len() - 1]
    }

    /// Stops strictly between the origin and the destination.
    pub fn interchanges(&self) -> &[&'a Station] {
        &self.stops[1..self.stops.len() - 1]
    }

    /// Consecutive pairs of stops.
    pub fn legs(&self) -> impl Iterator<Item = Leg<'a>> + '_ {
        self.stops.windows(2).map(|pair| Leg {
            from: pair[0],
            to: pair[1],
        })
    }

    /// Total great-circle distance over all legs, in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.legs().map(|leg| leg.distance_km()).sum()
    }
}
