//! Generation unit records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Technology of a generation unit.
///
/// Determines both the cost formula and whether the unit takes part in the
/// renewable pass or the merit-order pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// Wind turbine: zero marginal cost, throttleable down to 0.
    WindTurbine,
    /// Gas-fired plant burning gas at the scenario gas price.
    GasFired,
    /// Turbojet burning kerosine.
    TurboJet,
    /// Any other thermal unit. Ranked at zero cost.
    Thermal,
}

impl UnitKind {
    /// Returns `true` for kinds dispatched in the renewable pass.
    pub fn is_renewable(self) -> bool {
        matches!(self, Self::WindTurbine)
    }

    /// Wire name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WindTurbine => "windturbine",
            Self::GasFired => "gasfired",
            Self::TurboJet => "turbojet",
            Self::Thermal => "thermal",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single generation unit of the fleet.
///
/// A running unit produces an output within `[pmin_mw, pmax_mw]`; a stopped
/// unit produces 0. Wind turbines are the exception and may run anywhere in
/// `[0, pmax_mw * wind_factor]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationUnit {
    /// Unique unit identifier.
    pub name: String,
    /// Technology of the unit.
    #[serde(rename = "type")]
    pub kind: UnitKind,
    /// Fuel-to-electricity conversion efficiency (0.0, 1.0].
    pub efficiency: f64,
    /// Minimum output while running (MW).
    #[serde(rename = "pmin")]
    pub pmin_mw: f64,
    /// Maximum output (MW).
    #[serde(rename = "pmax")]
    pub pmax_mw: f64,
}

impl GenerationUnit {
    /// Creates a new generation unit.
    ///
    /// No validation happens here; see [`crate::fleet::Scenario::validate`].
    pub fn new(
        name: impl Into<String>,
        kind: UnitKind,
        efficiency: f64,
        pmin_mw: f64,
        pmax_mw: f64,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            efficiency,
            pmin_mw,
            pmax_mw,
        }
    }

    /// Output range usable on top of the minimum (`pmax - pmin`).
    pub fn headroom_mw(&self) -> f64 {
        self.pmax_mw - self.pmin_mw
    }
}
