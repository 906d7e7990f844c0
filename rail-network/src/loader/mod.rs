//! CSV ingestion.
//!
//! Reads a stations table with the columns `name`, `region`, `crs`,
//! `latitude`, `longitude` and `hub` (in any order, extra columns ignored)
//! and builds a [`RailNetwork`] from it.

mod error;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::domain::Station;
use crate::network::RailNetwork;

pub use error::LoadError;

/// Load a network from a CSV file on disk.
pub fn read_rail_network(path: impl AsRef<Path>) -> Result<RailNetwork, LoadError> {
    Ok(RailNetwork::new(read_stations(path)?)?)
}

/// Load a network from CSV data.
pub fn load_rail_network<R: Read>(reader: R) -> Result<RailNetwork, LoadError> {
    Ok(RailNetwork::new(load_stations(reader)?)?)
}

/// Read validated stations from a CSV file on disk.
pub fn read_stations(path: impl AsRef<Path>) -> Result<Vec<Station>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "reading stations");
    load_stations(file)
}

/// Read validated stations from CSV data.
///
/// The first row must be a header. Fields are trimmed before parsing.
pub fn load_stations<R: Read>(reader: R) -> Result<Vec<Station>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let columns = Columns::locate(reader.headers()?)?;

    let mut stations = Vec::new();
    for record in reader.records() {
        stations.push(columns.station(&record?)?);
    }
    debug!(rows = stations.len(), "parsed station rows");
    Ok(stations)
}

/// Positions of the required columns within a row.
struct Columns {
    name: usize,
    region: usize,
    crs: usize,
    latitude: usize,
    longitude: usize,
    hub: usize,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(LoadError::MissingColumn(column))
        };
        Ok(Self {
            name: find("name")?,
            region: find("region")?,
            crs: find("crs")?,
            latitude: find("latitude")?,
            longitude: find("longitude")?,
            hub: find("hub")?,
        })
    }

    fn station(&self, record: &csv::StringRecord) -> Result<Station, LoadError> {
        let field = |i: usize| record.get(i).unwrap_or_default();
        let crs = field(self.crs);

        let coordinate = |column: &'static str, i: usize| {
            let value = field(i);
            value
                .parse::<f64>()
                .map_err(|_| LoadError::InvalidCoordinate {
                    crs: crs.to_string(),
                    column,
                    value: value.to_string(),
                })
        };
        let latitude = coordinate("latitude", self.latitude)?;
        let longitude = coordinate("longitude", self.longitude)?;

        let hub_value = field(self.hub);
        let is_hub = parse_hub_flag(hub_value).ok_or_else(|| LoadError::InvalidHubFlag {
            crs: crs.to_string(),
            value: hub_value.to_string(),
        })?;

        Station::new(
            field(self.name),
            field(self.region),
            crs,
            latitude,
            longitude,
            is_hub,
        )
        .map_err(|source| LoadError::Station {
            crs: crs.to_string(),
            source,
        })
    }
}

/// Interpret a hub flag, accepting the usual spellings of a boolean.
fn parse_hub_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}
