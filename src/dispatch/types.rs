//! Core dispatch types: allocations and the finished plan.

use std::fmt;

use crate::fleet::{GenerationUnit, UnitKind};

/// Remaining load below this magnitude counts as fully served (MW).
pub const LOAD_TOLERANCE_MW: f64 = 1e-6;

/// Power committed to one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    /// Unit name.
    pub name: String,
    /// Unit technology.
    pub kind: UnitKind,
    /// Committed output (MW).
    pub power_mw: f64,
}

impl Allocation {
    /// Creates an allocation committing `power_mw` to `unit`.
    pub fn new(unit: &GenerationUnit, power_mw: f64) -> Self {
        Self {
            name: unit.name.clone(),
            kind: unit.kind,
            power_mw,
        }
    }

    /// Creates a zero allocation for a unit that stays off.
    pub fn idle(unit: &GenerationUnit) -> Self {
        Self::new(unit, 0.0)
    }

    /// Returns `true` if the unit was committed above zero.
    pub fn is_running(&self) -> bool {
        self.power_mw > 0.0
    }
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<20} {:<12} {:>10.1} MW",
            self.name, self.kind, self.power_mw
        )
    }
}

/// Record of a backtrack adjustment made during the merit-order pass.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktrackAdjustment {
    /// Earlier unit whose output was reduced.
    pub donor: String,
    /// Unit that could only start at its minimum.
    pub unit: String,
    /// Output moved from `donor` to `unit` (the unit's pmin, MW).
    pub shifted_mw: f64,
}

/// Result of one dispatch: every unit of the scenario in dispatch order.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchPlan {
    load_mw: f64,
    allocations: Vec<Allocation>,
    adjustment: Option<BacktrackAdjustment>,
}

impl DispatchPlan {
    /// Assembles a plan from its parts.
    pub fn new(
        load_mw: f64,
        allocations: Vec<Allocation>,
        adjustment: Option<BacktrackAdjustment>,
    ) -> Self {
        Self {
            load_mw,
            allocations,
            adjustment,
        }
    }

    /// Requested load (MW).
    pub fn load_mw(&self) -> f64 {
        self.load_mw
    }

    /// Allocations in dispatch order.
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// Backtrack adjustment applied, if any.
    pub fn adjustment(&self) -> Option<&BacktrackAdjustment> {
        self.adjustment.as_ref()
    }

    /// Sum of all committed outputs (MW).
    pub fn committed_mw(&self) -> f64 {
        self.allocations.iter().map(|a| a.power_mw).sum()
    }

    /// Looks up the allocation for a unit by name.
    pub fn get(&self, name: &str) -> Option<&Allocation> {
        self.allocations.iter().find(|a| a.name == name)
    }
}

/// Load still to be served during one dispatch.
///
/// Owned by a single dispatch call; never shared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemainingLoad(f64);

impl RemainingLoad {
    /// Starts the counter at the requested load.
    pub fn new(load_mw: f64) -> Self {
        Self(load_mw)
    }

    /// Remaining load (MW).
    pub fn mw(self) -> f64 {
        self.0
    }

    /// Deducts a committed output.
    pub fn commit(&mut self, power_mw: f64) {
        self.0 -= power_mw;
    }

    /// Marks the load as fully served.
    pub fn clear(&mut self) {
        self.0 = 0.0;
    }

    /// Returns `true` once nothing is left to serve.
    pub fn is_satisfied(self) -> bool {
        self.0 <= LOAD_TOLERANCE_MW
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_display_aligns_columns() {
        let unit = GenerationUnit::new("tj1", UnitKind::TurboJet, 0.3, 0.0, 16.0);
        let line = Allocation::new(&unit, 5.0).to_string();
        assert_eq!(line, "tj1                  turbojet            5.0 MW");
    }

    #[test]
    fn remaining_load_counts_down() {
        let mut remaining = RemainingLoad::new(480.0);
        remaining.commit(200.0);
        assert_eq!(remaining.mw(), 280.0);
        assert!(!remaining.is_satisfied());
        remaining.clear();
        assert!(remaining.is_satisfied());
    }

    #[test]
    fn tiny_residual_counts_as_satisfied() {
        let mut remaining = RemainingLoad::new(0.3);
        remaining.commit(0.1);
        remaining.commit(0.2);
        assert!(remaining.is_satisfied());
    }

    #[test]
    fn plan_sums_and_looks_up() {
        let wind = GenerationUnit::new("wind1", UnitKind::WindTurbine, 1.0, 0.0, 150.0);
        let gas = GenerationUnit::new("gas1", UnitKind::GasFired, 0.5, 100.0, 460.0);
        let plan = DispatchPlan::new(
            300.0,
            vec![Allocation::new(&wind, 90.0), Allocation::new(&gas, 210.0)],
            None,
        );
        assert_eq!(plan.committed_mw(), 300.0);
        assert_eq!(plan.get("gas1").map(|a| a.power_mw), Some(210.0));
        assert!(plan.get("missing").is_none());
        assert!(plan.adjustment().is_none());
    }
}
