//! Post-hoc summary of a dispatch plan.

use std::fmt;

use serde::Serialize;

use super::types::DispatchPlan;

/// Aggregate figures derived from a finished plan.
///
/// Computed from the allocations so the summary can never disagree with
/// the plan it describes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchSummary {
    /// Requested load (MW).
    pub load_mw: f64,
    /// Sum of committed output (MW).
    pub committed_mw: f64,
    /// Output committed to wind units (MW).
    pub renewable_mw: f64,
    /// Output committed to thermal units (MW).
    pub dispatchable_mw: f64,
    /// Share of the load covered by wind (%).
    pub renewable_share_pct: f64,
    /// Number of units running above zero.
    pub running_units: usize,
    /// Total number of units in the plan.
    pub total_units: usize,
    /// Last thermal unit committed in merit order, if any.
    pub marginal_unit: Option<String>,
    /// Whether a backtrack adjustment was needed.
    pub backtracked: bool,
}

impl DispatchSummary {
    /// Computes the summary of `plan`.
    pub fn from_plan(plan: &DispatchPlan) -> Self {
        let mut renewable_mw = 0.0;
        let mut dispatchable_mw = 0.0;
        let mut running_units = 0;
        let mut marginal_unit = None;

        for a in plan.allocations() {
            if a.kind.is_renewable() {
                renewable_mw += a.power_mw;
            } else {
                dispatchable_mw += a.power_mw;
                if a.is_running() {
                    marginal_unit = Some(a.name.clone());
                }
            }
            if a.is_running() {
                running_units += 1;
            }
        }

        let load_mw = plan.load_mw();
        let renewable_share_pct = if load_mw > 0.0 {
            100.0 * renewable_mw / load_mw
        } else {
            0.0
        };

        Self {
            load_mw,
            committed_mw: renewable_mw + dispatchable_mw,
            renewable_mw,
            dispatchable_mw,
            renewable_share_pct,
            running_units,
            total_units: plan.allocations().len(),
            marginal_unit,
            backtracked: plan.adjustment().is_some(),
        }
    }
}

impl fmt::Display for DispatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Dispatch Summary ---")?;
        writeln!(f, "Load requested:        {:.1} MW", self.load_mw)?;
        writeln!(f, "Load committed:        {:.1} MW", self.committed_mw)?;
        writeln!(
            f,
            "Wind:                  {:.1} MW ({:.1}%)",
            self.renewable_mw, self.renewable_share_pct
        )?;
        writeln!(f, "Thermal:               {:.1} MW", self.dispatchable_mw)?;
        writeln!(
            f,
            "Running units:         {} of {}",
            self.running_units, self.total_units
        )?;
        writeln!(
            f,
            "Marginal unit:         {}",
            self.marginal_unit.as_deref().unwrap_or("-")
        )?;
        write!(f, "Backtrack adjustment:  {}", self.backtracked)
    }
}
