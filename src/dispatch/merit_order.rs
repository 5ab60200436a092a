//! Merit-order pass: fills the load left after wind with ranked thermal units.
//!
//! Units are committed cheapest first. A unit runs either at its `pmax`, at
//! exactly the remaining load (when that lies within `[pmin, pmax]`), or not
//! at all. When the remaining load is below the next unit's `pmin`, an earlier
//! committed unit is turned down by that `pmin` so the new unit can start at
//! `pmin + remaining` without overshooting the load.

use crate::error::InfeasibleDispatchError;
use crate::fleet::GenerationUnit;

use super::ranking::RankedUnit;
use super::types::{Allocation, BacktrackAdjustment, LOAD_TOLERANCE_MW, RemainingLoad};

/// Allocations produced by the merit-order pass.
#[derive(Debug, Clone, PartialEq)]
pub struct MeritOrderOutcome {
    /// One allocation per ranked unit, in rank order.
    pub allocations: Vec<Allocation>,
    /// Backtrack adjustment applied to reach the load, if one was needed.
    pub adjustment: Option<BacktrackAdjustment>,
}

/// Commits ranked units until the remaining load reaches zero.
///
/// Every ranked unit appears in the output; units visited after the load
/// is covered are reported at 0.
///
/// # Errors
///
/// Returns `NoCompensatingUnit` when a unit's `pmin` exceeds the remaining
/// load and no earlier unit can be turned down, and `Unserved` when load is
/// left after the last unit.
pub fn merit_order_pass(
    ranked: &[RankedUnit<'_>],
    remaining: &mut RemainingLoad,
) -> Result<MeritOrderOutcome, InfeasibleDispatchError> {
    let mut allocations = Vec::with_capacity(ranked.len());
    // Indices into `allocations` of units running above zero, in dispatch order.
    let mut committed: Vec<usize> = Vec::new();
    let mut adjustment = None;

    for (idx, entry) in ranked.iter().enumerate() {
        let unit = entry.unit;

        if remaining.is_satisfied() {
            allocations.push(Allocation::idle(unit));
            continue;
        }

        // Bounds are compared with the same tolerance that decides when the
        // load is served. A residual within tolerance of a bound commits the
        // bound itself.
        let residual = remaining.mw();
        if residual + LOAD_TOLERANCE_MW >= unit.pmax_mw {
            allocations.push(Allocation::new(unit, unit.pmax_mw));
            remaining.commit(unit.pmax_mw);
            if unit.pmax_mw > 0.0 {
                committed.push(idx);
            }
        } else if residual + LOAD_TOLERANCE_MW >= unit.pmin_mw {
            allocations.push(Allocation::new(unit, residual.max(unit.pmin_mw)));
            remaining.clear();
            committed.push(idx);
        } else {
            let donor_idx = find_donor(ranked, &committed, unit, residual)?;
            allocations[donor_idx].power_mw -= unit.pmin_mw;
            allocations.push(Allocation::new(unit, unit.pmin_mw + residual));
            remaining.clear();
            adjustment = Some(BacktrackAdjustment {
                donor: ranked[donor_idx].unit.name.clone(),
                unit: unit.name.clone(),
                shifted_mw: unit.pmin_mw,
            });
        }
    }

    if !remaining.is_satisfied() {
        return Err(InfeasibleDispatchError::Unserved {
            residual: remaining.mw(),
        });
    }

    Ok(MeritOrderOutcome {
        allocations,
        adjustment,
    })
}

/// Searches committed units, latest first, for one that can give up `unit.pmin_mw`.
///
/// A donor qualifies when its headroom `pmax - pmin` exceeds `unit.pmin`. Every unit on
/// the committed stack is running at its `pmax` at this point, so the donor
/// stays strictly above its own minimum after the reduction.
fn find_donor(
    ranked: &[RankedUnit<'_>],
    committed: &[usize],
    unit: &GenerationUnit,
    residual: f64,
) -> Result<usize, InfeasibleDispatchError> {
    let no_donor = || InfeasibleDispatchError::NoCompensatingUnit {
        unit: unit.name.clone(),
        pmin: unit.pmin_mw,
        residual,
    };

    if unit.pmin_mw + residual > unit.pmax_mw {
        return Err(no_donor());
    }

    committed
        .iter()
        .rev()
        .copied()
        .find(|&i| ranked[i].unit.headroom_mw() > unit.pmin_mw)
        .ok_or_else(no_donor)
}
