//! Merit order: dispatchable units sorted by marginal cost.

use crate::fleet::{Fuels, GenerationUnit};

use super::cost::CostModel;

/// A dispatchable unit paired with its marginal cost for this scenario.
///
/// Borrows the unit; the caller's records are never written to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedUnit<'a> {
    /// The unit being ranked.
    pub unit: &'a GenerationUnit,
    /// Marginal cost (euro/MWh).
    pub cost_per_mwh: f64,
}

/// Ranks all non-renewable units by ascending marginal cost.
///
/// The sort is stable: units of equal cost keep their input order, so
/// identical inputs always produce the identical ranking.
pub fn merit_order<'a>(
    units: &'a [GenerationUnit],
    fuels: &Fuels,
    model: CostModel,
) -> Vec<RankedUnit<'a>> {
    let mut ranked: Vec<RankedUnit<'a>> = units
        .iter()
        .filter(|u| !u.kind.is_renewable())
        .map(|unit| RankedUnit {
            unit,
            cost_per_mwh: model.cost_per_mwh(unit, fuels),
        })
        .collect();
    ranked.sort_by(|a, b| a.cost_per_mwh.total_cmp(&b.cost_per_mwh));
    ranked
}
