//! Priced journeys.

use std::fmt;

use super::Journey;
use crate::domain::Station;

/// The fare charged for one leg, with the inputs it was priced from.
#[derive(Debug, Clone, PartialEq)]
pub struct LegQuote<'a> {
    pub from: &'a Station,
    pub to: &'a Station,
    pub distance_km: f64,
    pub crosses_region: bool,
    /// Hubs in the region this leg arrives in.
    pub dest_region_hubs: usize,
    pub fare: f64,
}

/// A planned journey together with its leg-by-leg fares.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyQuote<'a> {
    journey: Journey<'a>,
    legs: Vec<LegQuote<'a>>,
}

impl<'a> JourneyQuote<'a> {
    pub(crate) fn new(journey: Journey<'a>, legs: Vec<LegQuote<'a>>) -> Self {
        Self { journey, legs }
    }

    pub fn journey(&self) -> &Journey<'a> {
        &self.journey
    }

    pub fn legs(&self) -> &[LegQuote<'a>] {
        &self.legs
    }

    /// Sum of the leg fares.
    pub fn total(&self) -> f64 {
        self.legs.iter().map(|leg| leg.fare).sum()
    }
}

/// Human-readable summary, e.g.
///
/// ```text
/// Journey from Leeds (LDS) to Brighton (BTN)
/// Route: LDS -> YRK (York) -> CLJ (Clapham Junction) -> BTN
/// Fare: £23.41
/// ```
impl fmt::Display for JourneyQuote<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = self.journey.origin();
        let destination = self.journey.destination();
        writeln!(
            f,
            "Journey from {} ({}) to {} ({})",
            origin.name(),
            origin.crs(),
            destination.name(),
            destination.crs()
        )?;
        write!(f, "Route: {} -> ", origin.crs())?;
        for stop in self.journey.interchanges() {
            write!(f, "{} ({}) -> ", stop.crs(), stop.name())?;
        }
        writeln!(f, "{}", destination.crs())?;
        write!(f, "Fare: £{:.2}", self.total())
    }
}
