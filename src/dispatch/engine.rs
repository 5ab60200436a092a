//! Dispatch engine: runs the three passes over one scenario.

use crate::error::{DispatchError, InfeasibleDispatchError};
use crate::fleet::Scenario;

use super::cost::CostModel;
use super::merit_order::merit_order_pass;
use super::ranking::merit_order;
use super::renewable::renewable_pass;
use super::types::{DispatchPlan, LOAD_TOLERANCE_MW, RemainingLoad};

/// Stateless dispatcher holding only the selected cost model.
///
/// `Copy` and free of interior state, so every request can build its own or
/// share one by value. All working data lives on the stack of
/// [`Dispatcher::dispatch`].
///
/// # Examples
///
/// ```
/// use merit_dispatch::dispatch::Dispatcher;
/// use merit_dispatch::fleet::{Fuels, GenerationUnit, Scenario, UnitKind};
///
/// let scenario = Scenario::new(
///     480.0,
///     Fuels { gas_per_mwh: 13.4, kerosine_per_mwh: 50.8, co2_per_ton: 20.0 },
///     1.0,
///     vec![
///         GenerationUnit::new("wind1", UnitKind::WindTurbine, 1.0, 0.0, 200.0),
///         GenerationUnit::new("gas1", UnitKind::GasFired, 0.5, 100.0, 460.0),
///     ],
/// );
/// let plan = Dispatcher::default().dispatch(&scenario).unwrap();
/// assert_eq!(plan.get("wind1").unwrap().power_mw, 200.0);
/// assert_eq!(plan.get("gas1").unwrap().power_mw, 280.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dispatcher {
    cost_model: CostModel,
}

impl Dispatcher {
    /// Creates a dispatcher ranking units with `cost_model`.
    pub fn new(cost_model: CostModel) -> Self {
        Self { cost_model }
    }

    /// Cost model used for ranking.
    pub fn cost_model(&self) -> CostModel {
        self.cost_model
    }

    /// Allocates `scenario.load_mw` across the fleet.
    ///
    /// Order of work:
    /// 1. Validate the scenario.
    /// 2. Reject loads above the available fleet capacity.
    /// 3. Commit wind (renewable pass).
    /// 4. Rank the remaining units by marginal cost.
    /// 5. Commit ranked units (merit-order pass with backtracking).
    ///
    /// The returned plan lists every unit exactly once: wind units first in
    /// input order, then thermal units in merit order.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::Configuration` for malformed scenarios and
    /// `DispatchError::Infeasible` when the load cannot be met.
    pub fn dispatch(&self, scenario: &Scenario) -> Result<DispatchPlan, DispatchError> {
        scenario.validate()?;

        let capacity = scenario.available_capacity_mw();
        if scenario.load_mw > capacity + LOAD_TOLERANCE_MW {
            return Err(InfeasibleDispatchError::InsufficientCapacity {
                load: scenario.load_mw,
                capacity,
            }
            .into());
        }

        let mut remaining = RemainingLoad::new(scenario.load_mw);
        let mut allocations = renewable_pass(scenario, &mut remaining);

        let ranked = merit_order(&scenario.units, &scenario.fuels, self.cost_model);
        let outcome = merit_order_pass(&ranked, &mut remaining)?;
        allocations.extend(outcome.allocations);

        Ok(DispatchPlan::new(
            scenario.load_mw,
            allocations,
            outcome.adjustment,
        ))
    }
}
