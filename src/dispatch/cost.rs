//! Marginal cost model used to rank dispatchable units.

use std::fmt;
use std::str::FromStr;

use crate::fleet::{Fuels, GenerationUnit, UnitKind};

/// CO2 emitted per MWh produced by a gas-fired unit (ton/MWh).
pub const DEFAULT_CO2_EMISSION_FACTOR: f64 = 0.3;

/// Selectable marginal cost formula.
///
/// Costs are only used to order units, never to price their output.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CostModel {
    /// Fuel price divided by efficiency.
    #[default]
    FuelOnly,
    /// Fuel cost plus an emission term for gas-fired units.
    WithCarbon {
        /// CO2 emitted per MWh produced (ton/MWh).
        co2_emission_factor: f64,
    },
}

impl CostModel {
    /// Carbon-priced model with the default emission factor.
    pub fn with_carbon() -> Self {
        Self::WithCarbon {
            co2_emission_factor: DEFAULT_CO2_EMISSION_FACTOR,
        }
    }

    /// Marginal cost of producing one MWh with `unit` (euro/MWh).
    ///
    /// Wind and other thermal units cost 0. `unit.efficiency` must be > 0,
    /// which [`crate::fleet::Scenario::validate`] guarantees.
    ///
    /// # Examples
    ///
    /// ```
    /// use merit_dispatch::dispatch::cost::CostModel;
    /// use merit_dispatch::fleet::{Fuels, GenerationUnit, UnitKind};
    ///
    /// let fuels = Fuels { gas_per_mwh: 13.4, kerosine_per_mwh: 50.8, co2_per_ton: 20.0 };
    /// let gas = GenerationUnit::new("gas1", UnitKind::GasFired, 0.5, 100.0, 460.0);
    /// assert_eq!(CostModel::FuelOnly.cost_per_mwh(&gas, &fuels), 26.8);
    /// ```
    pub fn cost_per_mwh(&self, unit: &GenerationUnit, fuels: &Fuels) -> f64 {
        match unit.kind {
            UnitKind::GasFired => {
                let fuel = fuels.gas_per_mwh / unit.efficiency;
                match *self {
                    Self::FuelOnly => fuel,
                    Self::WithCarbon {
                        co2_emission_factor,
                    } => fuel + co2_emission_factor * fuels.co2_per_ton,
                }
            }
            UnitKind::TurboJet => fuels.kerosine_per_mwh / unit.efficiency,
            UnitKind::WindTurbine | UnitKind::Thermal => 0.0,
        }
    }

    /// Config name of the model.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FuelOnly => "fuel_only",
            Self::WithCarbon { .. } => "with_carbon",
        }
    }
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FuelOnly => f.write_str("fuel_only"),
            Self::WithCarbon {
                co2_emission_factor,
            } => write!(f, "with_carbon ({co2_emission_factor} t/MWh)"),
        }
    }
}

impl FromStr for CostModel {
    type Err = String;

    /// Parses a model name; `with_carbon` uses the default emission factor.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fuel_only" | "fuel-only" => Ok(Self::FuelOnly),
            "with_carbon" | "with-carbon" => Ok(Self::with_carbon()),
            other => Err(format!(
                "unknown cost model \"{other}\", expected \"fuel_only\" or \"with_carbon\""
            )),
        }
    }
}
