//! Dispatch scenario: what has to be produced and at which prices.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::unit::GenerationUnit;
use crate::error::ConfigurationError;

/// Fuel and emission prices for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Fuels {
    /// Gas price (euro/MWh of fuel).
    pub gas_per_mwh: f64,
    /// Kerosine price (euro/MWh of fuel).
    pub kerosine_per_mwh: f64,
    /// Emission allowance price (euro/ton CO2).
    pub co2_per_ton: f64,
}

/// A fully specified dispatch request.
///
/// Immutable for the duration of one dispatch; the engine works on its own
/// copies of the figures it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Total power demand to satisfy (MW).
    pub load_mw: f64,
    /// Fuel and carbon prices.
    pub fuels: Fuels,
    /// Fraction of wind nameplate capacity currently available (0.0 to 1.0).
    pub wind_factor: f64,
    /// Fleet in input order.
    pub units: Vec<GenerationUnit>,
}

impl Scenario {
    /// Creates a new scenario.
    pub fn new(load_mw: f64, fuels: Fuels, wind_factor: f64, units: Vec<GenerationUnit>) -> Self {
        Self {
            load_mw,
            fuels,
            wind_factor,
            units,
        }
    }

    /// Wind output currently available from `unit` (MW).
    pub fn available_wind_mw(&self, unit: &GenerationUnit) -> f64 {
        unit.pmax_mw * self.wind_factor
    }

    /// Upper bound on what the fleet can produce right now (MW).
    ///
    /// Wind contributes its available output, every other unit its `pmax`.
    pub fn available_capacity_mw(&self) -> f64 {
        self.units
            .iter()
            .map(|u| {
                if u.kind.is_renewable() {
                    self.available_wind_mw(u)
                } else {
                    u.pmax_mw
                }
            })
            .sum()
    }

    /// Checks every field and returns the first violation found.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` describing the offending field.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        ensure_finite("load", self.load_mw)?;
        if self.load_mw < 0.0 {
            return Err(ConfigurationError::NegativeLoad(self.load_mw));
        }

        for (fuel, price) in [
            ("gas", self.fuels.gas_per_mwh),
            ("kerosine", self.fuels.kerosine_per_mwh),
            ("co2", self.fuels.co2_per_ton),
        ] {
            ensure_finite(fuel, price)?;
            if price < 0.0 {
                return Err(ConfigurationError::NegativePrice { fuel, price });
            }
        }

        ensure_finite("wind", self.wind_factor)?;
        if !(0.0..=1.0).contains(&self.wind_factor) {
            return Err(ConfigurationError::WindOutOfRange(self.wind_factor * 100.0));
        }

        let mut seen = HashSet::with_capacity(self.units.len());
        for unit in &self.units {
            if !seen.insert(unit.name.as_str()) {
                return Err(ConfigurationError::DuplicateName(unit.name.clone()));
            }
            validate_unit(unit)?;
        }

        Ok(())
    }
}

fn validate_unit(unit: &GenerationUnit) -> Result<(), ConfigurationError> {
    ensure_finite(&format!("{}.efficiency", unit.name), unit.efficiency)?;
    ensure_finite(&format!("{}.pmin", unit.name), unit.pmin_mw)?;
    ensure_finite(&format!("{}.pmax", unit.name), unit.pmax_mw)?;

    if unit.efficiency <= 0.0 {
        return Err(ConfigurationError::NonPositiveEfficiency {
            unit: unit.name.clone(),
            efficiency: unit.efficiency,
        });
    }
    if unit.pmin_mw < 0.0 || unit.pmax_mw < 0.0 {
        return Err(ConfigurationError::NegativeBound {
            unit: unit.name.clone(),
            pmin: unit.pmin_mw,
            pmax: unit.pmax_mw,
        });
    }
    if unit.pmin_mw > unit.pmax_mw {
        return Err(ConfigurationError::InvertedEnvelope {
            unit: unit.name.clone(),
            pmin: unit.pmin_mw,
            pmax: unit.pmax_mw,
        });
    }
    Ok(())
}

fn ensure_finite(field: &str, value: f64) -> Result<(), ConfigurationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigurationError::NonFinite {
            field: field.to_string(),
        })
    }
}
