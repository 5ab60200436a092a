//! Error taxonomy for scenario validation and dispatch.
//!
//! Every variant carries a stable reason code via `code()` so callers can
//! translate refusals without matching on display strings.

use thiserror::Error;

/// A scenario that cannot be dispatched because it is malformed.
///
/// Detected before any unit is committed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("malformed scenario: {0}")]
    Malformed(String),

    #[error("load must be >= 0, got {0}")]
    NegativeLoad(f64),

    #[error("`{field}` must be a finite number")]
    NonFinite { field: String },

    #[error("fuel price `{fuel}` must be >= 0, got {price}")]
    NegativePrice { fuel: &'static str, price: f64 },

    /// Wind availability outside 0..=100, reported in percent as sent on the wire.
    #[error("wind availability must be within [0, 100] %, got {0} %")]
    WindOutOfRange(f64),

    #[error("unit `{unit}` has non-positive efficiency {efficiency}")]
    NonPositiveEfficiency { unit: String, efficiency: f64 },

    #[error("unit `{unit}` has negative output bound (pmin {pmin}, pmax {pmax})")]
    NegativeBound { unit: String, pmin: f64, pmax: f64 },

    #[error("unit `{unit}` has pmin {pmin} above pmax {pmax}")]
    InvertedEnvelope { unit: String, pmin: f64, pmax: f64 },

    #[error("unit name `{0}` appears more than once")]
    DuplicateName(String),
}

impl ConfigurationError {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "malformed_scenario",
            Self::NegativeLoad(_) => "negative_load",
            Self::NonFinite { .. } => "non_finite_value",
            Self::NegativePrice { .. } => "negative_price",
            Self::WindOutOfRange(_) => "wind_out_of_range",
            Self::NonPositiveEfficiency { .. } => "non_positive_efficiency",
            Self::NegativeBound { .. } => "negative_bound",
            Self::InvertedEnvelope { .. } => "inverted_envelope",
            Self::DuplicateName(_) => "duplicate_unit_name",
        }
    }
}

/// A well-formed scenario whose load cannot be met by the fleet.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InfeasibleDispatchError {
    #[error("load {load} MW exceeds available fleet capacity {capacity} MW")]
    InsufficientCapacity { load: f64, capacity: f64 },

    #[error(
        "unit `{unit}` cannot run below pmin {pmin} MW and no committed unit can absorb \
         the residual {residual} MW"
    )]
    NoCompensatingUnit {
        unit: String,
        pmin: f64,
        residual: f64,
    },

    #[error("{residual} MW of load left unserved after visiting every unit")]
    Unserved { residual: f64 },
}

impl InfeasibleDispatchError {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InsufficientCapacity { .. } => "insufficient_capacity",
            Self::NoCompensatingUnit { .. } => "no_compensating_unit",
            Self::Unserved { .. } => "unserved_load",
        }
    }
}

/// Refusal returned by the dispatcher. Never accompanied by a partial allocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Infeasible(#[from] InfeasibleDispatchError),
}

impl DispatchError {
    /// Reason code of the wrapped error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Configuration(e) => e.code(),
            Self::Infeasible(e) => e.code(),
        }
    }

    /// Returns `true` for errors caused by the scenario itself rather than the fleet.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_pass_through_wrapper() {
        let err: DispatchError = ConfigurationError::NegativeLoad(-1.0).into();
        assert_eq!(err.code(), "negative_load");
        assert!(err.is_configuration());

        let err: DispatchError = InfeasibleDispatchError::InsufficientCapacity {
            load: 10.0,
            capacity: 5.0,
        }
        .into();
        assert_eq!(err.code(), "insufficient_capacity");
        assert!(!err.is_configuration());
    }

    #[test]
    fn display_is_transparent() {
        let err: DispatchError = ConfigurationError::DuplicateName("gas1".into()).into();
        assert_eq!(err.to_string(), "unit name `gas1` appears more than once");
    }
}
