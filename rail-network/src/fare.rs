//! Fare model.
//!
//! A leg's fare grows with distance but is damped exponentially, so long
//! legs are cheap per kilometre. Legs that cross into another region pay a
//! demand surcharge proportional to how many hubs the destination region
//! has.

/// A fare parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FareParameter {
    Base,
    DecayKm,
    HubDivisor,
}

impl std::fmt::Display for FareParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FareParameter::Base => write!(f, "base fare"),
            FareParameter::DecayKm => write!(f, "decay distance"),
            FareParameter::HubDivisor => write!(f, "hub divisor"),
        }
    }
}

/// A parameter outside the range the formula is defined for.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("invalid {parameter} {value}: {}", .parameter.requirement())]
pub struct InvalidFareModel {
    pub parameter: FareParameter,
    pub value: f64,
}

impl FareParameter {
    fn requirement(self) -> &'static str {
        match self {
            FareParameter::Base => "must be finite and not negative",
            FareParameter::DecayKm | FareParameter::HubDivisor => {
                "must be finite and greater than zero"
            }
        }
    }

    fn accepts(self, value: f64) -> bool {
        value.is_finite()
            && match self {
                FareParameter::Base => value >= 0.0,
                FareParameter::DecayKm | FareParameter::HubDivisor => value > 0.0,
            }
    }

    /// Check a single value for this parameter.
    pub fn check(self, value: f64) -> Result<f64, InvalidFareModel> {
        if self.accepts(value) {
            Ok(value)
        } else {
            Err(InvalidFareModel {
                parameter: self,
                value,
            })
        }
    }
}

/// Parameters of the fare formula.
///
/// `fare = base + d * exp(-d / decay_km) * (1 + crosses * hubs / hub_divisor)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareModel {
    /// Fare charged for a zero-length leg.
    pub base: f64,

    /// Distance scale of the exponential damping (km).
    pub decay_km: f64,

    /// Each hub in the destination region adds `1 / hub_divisor` to the
    /// cross-region multiplier.
    pub hub_divisor: f64,
}

impl FareModel {
    /// Create a model with the given parameters, unchecked.
    ///
    /// Use [`FareModel::try_new`] for values from outside the program.
    pub fn new(base: f64, decay_km: f64, hub_divisor: f64) -> Self {
        Self {
            base,
            decay_km,
            hub_divisor,
        }
    }

    /// Create a model, rejecting parameters that would make a fare NaN,
    /// infinite or negative.
    ///
    /// # Errors
    ///
    /// The first of `base`, `decay_km`, `hub_divisor` that is not finite,
    /// or a negative `base`, or a `decay_km` or `hub_divisor` that is not
    /// strictly positive.
    pub fn try_new(base: f64, decay_km: f64, hub_divisor: f64) -> Result<Self, InvalidFareModel> {
        Ok(Self::new(
            FareParameter::Base.check(base)?,
            FareParameter::DecayKm.check(decay_km)?,
            FareParameter::HubDivisor.check(hub_divisor)?,
        ))
    }

    /// Price of a single leg.
    pub fn price(&self, distance_km: f64, crosses_region: bool, dest_region_hubs: usize) -> f64 {
        let demand = if crosses_region {
            dest_region_hubs as f64 / self.hub_divisor
        } else {
            0.0
        };
        self.base + distance_km * (-distance_km / self.decay_km).exp() * (1.0 + demand)
    }
}

impl Default for FareModel {
    fn default() -> Self {
        Self {
            base: 1.0,
            decay_km: 100.0,
            hub_divisor: 10.0,
        }
    }
}

/// Price of a single leg under the default [`FareModel`].
///
/// ```
/// assert_eq!(rail_network::fare::fare(0.0, false, 0), 1.0);
/// ```
pub fn fare(distance_km: f64, crosses_region: bool, dest_region_hubs: usize) -> f64 {
    FareModel::default().price(distance_km, crosses_region, dest_region_hubs)
}
