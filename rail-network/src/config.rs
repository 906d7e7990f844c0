//! Server configuration, read from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::fare::{FareModel, FareParameter};

/// Path to the stations CSV (required).
pub const STATIONS_CSV_VAR: &str = "RAIL_STATIONS_CSV";
/// Address to listen on.
pub const LISTEN_ADDR_VAR: &str = "RAIL_LISTEN_ADDR";
pub const FARE_BASE_VAR: &str = "RAIL_FARE_BASE";
pub const FARE_DECAY_KM_VAR: &str = "RAIL_FARE_DECAY_KM";
pub const FARE_HUB_DIVISOR_VAR: &str = "RAIL_FARE_HUB_DIVISOR";

const DEFAULT_LISTEN_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed
    #[error("{var} has invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Configuration for the fare server.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Stations table to load at startup.
    pub stations_csv: PathBuf,

    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,

    /// Fare formula parameters.
    pub fare_model: FareModel,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Unset and empty values are treated alike.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let stations_csv = get(STATIONS_CSV_VAR)
            .map(PathBuf::from)
            .ok_or(ConfigError::Missing(STATIONS_CSV_VAR))?;

        let listen_addr = parse_or(get(LISTEN_ADDR_VAR), LISTEN_ADDR_VAR, || {
            SocketAddr::from(DEFAULT_LISTEN_ADDR)
        })?;

        let defaults = FareModel::default();
        let fare_model = FareModel::new(
            fare_parameter(&get, FARE_BASE_VAR, FareParameter::Base, defaults.base)?,
            fare_parameter(&get, FARE_DECAY_KM_VAR, FareParameter::DecayKm, defaults.decay_km)?,
            fare_parameter(
                &get,
                FARE_HUB_DIVISOR_VAR,
                FareParameter::HubDivisor,
                defaults.hub_divisor,
            )?,
        );

        Ok(Self {
            stations_csv,
            listen_addr,
            fare_model,
        })
    }
}

/// Parse a fare parameter, rejecting values the fare formula is undefined for.
fn fare_parameter(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    parameter: FareParameter,
    default: f64,
) -> Result<f64, ConfigError> {
    let value = get(var);
    let parsed = parse_or(value.clone(), var, || default)?;
    parameter.check(parsed).map_err(|_| ConfigError::Invalid {
        var,
        value: value.unwrap_or_else(|| default.to_string()),
    })
}

fn parse_or<T: FromStr>(
    value: Option<String>,
    var: &'static str,
    default: impl FnOnce() -> T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default()),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}
