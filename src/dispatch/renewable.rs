//! Renewable pass: zero-cost wind output is used before any thermal unit.

use crate::fleet::Scenario;

use super::types::{Allocation, RemainingLoad};

/// Commits available wind output against the remaining load.
///
/// Wind units are visited in input order. Each one commits
/// `min(pmax * wind_factor, remaining)`; once the load is fully covered the
/// remaining wind units are reported at 0.
///
/// Returns one allocation per wind unit of the scenario.
pub fn renewable_pass(scenario: &Scenario, remaining: &mut RemainingLoad) -> Vec<Allocation> {
    let mut allocations = Vec::new();
    let mut covered = false;

    for unit in scenario.units.iter().filter(|u| u.kind.is_renewable()) {
        if covered {
            allocations.push(Allocation::idle(unit));
            continue;
        }

        let available_mw = scenario.available_wind_mw(unit);
        if available_mw < remaining.mw() {
            allocations.push(Allocation::new(unit, available_mw));
            remaining.commit(available_mw);
        } else {
            allocations.push(Allocation::new(unit, remaining.mw()));
            remaining.clear();
            covered = true;
        }
    }

    allocations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::{Fuels, GenerationUnit, UnitKind};

    fn wind_scenario(load_mw: f64, wind_factor: f64) -> Scenario {
        Scenario::new(
            load_mw,
            Fuels::default(),
            wind_factor,
            vec![
                GenerationUnit::new("gas1", UnitKind::GasFired, 0.5, 100.0, 460.0),
                GenerationUnit::new("wind1", UnitKind::WindTurbine, 1.0, 0.0, 150.0),
                GenerationUnit::new("wind2", UnitKind::WindTurbine, 1.0, 0.0, 36.0),
            ],
        )
    }

    fn powers(allocations: &[Allocation]) -> Vec<(&str, f64)> {
        allocations
            .iter()
            .map(|a| (a.name.as_str(), a.power_mw))
            .collect()
    }

    #[test]
    fn commits_all_available_wind_when_load_exceeds_it() {
        let scenario = wind_scenario(480.0, 0.6);
        let mut remaining = RemainingLoad::new(scenario.load_mw);
        let allocations = renewable_pass(&scenario, &mut remaining);

        assert_eq!(allocations.len(), 2);
        assert_eq!(allocations[0].power_mw, 90.0);
        assert!((allocations[1].power_mw - 21.6).abs() < 1e-9);
        assert!((remaining.mw() - 368.4).abs() < 1e-9);
    }

    #[test]
    fn stops_once_wind_covers_the_load() {
        let scenario = wind_scenario(100.0, 1.0);
        let mut remaining = RemainingLoad::new(scenario.load_mw);
        let allocations = renewable_pass(&scenario, &mut remaining);

        assert_eq!(powers(&allocations), [("wind1", 100.0), ("wind2", 0.0)]);
        assert!(remaining.is_satisfied());
    }

    #[test]
    fn no_wind_commits_zero() {
        let scenario = wind_scenario(480.0, 0.0);
        let mut remaining = RemainingLoad::new(scenario.load_mw);
        let allocations = renewable_pass(&scenario, &mut remaining);

        assert_eq!(powers(&allocations), [("wind1", 0.0), ("wind2", 0.0)]);
        assert_eq!(remaining.mw(), 480.0);
    }

    #[test]
    fn zero_load_reports_wind_at_zero() {
        let scenario = wind_scenario(0.0, 1.0);
        let mut remaining = RemainingLoad::new(scenario.load_mw);
        let allocations = renewable_pass(&scenario, &mut remaining);

        assert_eq!(powers(&allocations), [("wind1", 0.0), ("wind2", 0.0)]);
    }
}
