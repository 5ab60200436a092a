//! JSON wire format of production-plan requests and responses.
//!
//! Field names follow the public request contract, e.g. `gas(euro/MWh)` and
//! `wind(%)`, and are mapped onto the domain [`Scenario`] here so the engine
//! never sees them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dispatch::Allocation;
use crate::error::ConfigurationError;
use crate::fleet::{Fuels, GenerationUnit, Scenario};

/// Fuel prices and wind availability as sent by clients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelsPayload {
    /// Gas price (euro/MWh).
    #[serde(rename = "gas(euro/MWh)")]
    pub gas: f64,
    /// Kerosine price (euro/MWh).
    #[serde(rename = "kerosine(euro/MWh)")]
    pub kerosine: f64,
    /// CO2 allowance price (euro/ton).
    #[serde(rename = "co2(euro/ton)")]
    pub co2: f64,
    /// Wind availability (percent of nameplate capacity, 0 to 100).
    #[serde(rename = "wind(%)")]
    pub wind_pct: f64,
}

/// Body of a production-plan request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductionPlanRequest {
    /// Load to serve (MW).
    pub load: f64,
    /// Prices and wind availability.
    pub fuels: FuelsPayload,
    /// Fleet in input order.
    pub powerplants: Vec<GenerationUnit>,
}

impl ProductionPlanRequest {
    /// Parses a request from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Malformed` for invalid JSON, missing
    /// fields, or unknown unit types.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigurationError> {
        let request: Self =
            serde_json::from_str(s).map_err(|e| ConfigurationError::Malformed(e.to_string()))?;
        tracing::debug!(
            load = request.load,
            units = request.powerplants.len(),
            "parsed production plan request"
        );
        Ok(request)
    }

    /// Reads and parses a request from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Malformed` if the file cannot be read or parsed.
    pub fn from_json_path(path: &Path) -> Result<Self, ConfigurationError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            ConfigurationError::Malformed(format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    /// Converts the request into a domain scenario.
    ///
    /// `wind(%)` becomes a 0.0 to 1.0 wind factor. No validation happens
    /// here; the dispatcher validates every scenario it receives.
    pub fn into_scenario(self) -> Scenario {
        Scenario::new(
            self.load,
            Fuels {
                gas_per_mwh: self.fuels.gas,
                kerosine_per_mwh: self.fuels.kerosine,
                co2_per_ton: self.fuels.co2,
            },
            self.fuels.wind_pct / 100.0,
            self.powerplants,
        )
    }
}

impl From<ProductionPlanRequest> for Scenario {
    fn from(request: ProductionPlanRequest) -> Self {
        request.into_scenario()
    }
}

/// One entry of a production-plan response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    /// Unit name.
    pub name: String,
    /// Committed output (MW).
    pub p: f64,
}

impl From<&Allocation> for PlanEntry {
    fn from(a: &Allocation) -> Self {
        Self {
            name: a.name.clone(),
            p: a.power_mw,
        }
    }
}

/// Converts allocations to response entries, keeping dispatch order.
pub fn plan_entries(allocations: &[Allocation]) -> Vec<PlanEntry> {
    allocations.iter().map(PlanEntry::from).collect()
}
