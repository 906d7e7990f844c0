//! Station records.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Crs, Location, StationError};

/// A stop on the rail network.
///
/// Stations are validated on construction and immutable afterwards.
/// Two stations are equal when they share a CRS code; the code is the
/// identity of a station within a network.
#[derive(Debug, Clone)]
pub struct Station {
    name: String,
    region: String,
    crs: Crs,
    location: Location,
    is_hub: bool,
}

impl Station {
    /// Creates a station, validating the code first and then the
    /// latitude and longitude.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_network::domain::Station;
    ///
    /// let kgx = Station::new("London Kings Cross", "London", "KGX", 51.5308, -0.1238, true).unwrap();
    /// assert_eq!(kgx.to_string(), "Station(KGX-London Kings Cross/London-hub)");
    ///
    /// assert!(Station::new("Nowhere", "London", "kgx", 51.5, -0.1, false).is_err());
    /// assert!(Station::new("Nowhere", "London", "NWH", 95.0, -0.1, false).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        code: &str,
        latitude: f64,
        longitude: f64,
        is_hub: bool,
    ) -> Result<Self, StationError> {
        let crs = Crs::parse(code)?;
        let location = Location::new(latitude, longitude)?;
        Ok(Self {
            name: name.into(),
            region: region.into(),
            crs,
            location,
            is_hub,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn crs(&self) -> Crs {
        self.crs
    }

    pub fn latitude(&self) -> f64 {
        self.location.latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.location.longitude()
    }

    pub fn is_hub(&self) -> bool {
        self.is_hub
    }

    /// Returns true if both stations carry the same region label.
    pub fn shares_region_with(&self, other: &Station) -> bool {
        self.region == other.region
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_to(&self, other: &Station) -> f64 {
        self.location.haversine_km(&other.location)
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.crs == other.crs
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.crs.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({}-{}/{}", self.crs, self.name, self.region)?;
        if self.is_hub {
            f.write_str("-hub")?;
        }
        f.write_str(")")
    }
}
