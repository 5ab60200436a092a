//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use merit_dispatch::dispatch::DispatchPlan;
use merit_dispatch::fleet::{Fuels, GenerationUnit, Scenario, UnitKind};

/// Absolute tolerance for comparing committed power (MW).
pub const EPS_MW: f64 = 1e-6;

/// Fuel prices of the reference payloads (gas 13.4, kerosine 50.8, CO2 20).
pub fn default_fuels() -> Fuels {
    Fuels {
        gas_per_mwh: 13.4,
        kerosine_per_mwh: 50.8,
        co2_per_ton: 20.0,
    }
}

/// Six-unit fleet of the reference payloads: three gas, one turbojet, two wind.
pub fn reference_fleet() -> Vec<GenerationUnit> {
    vec![
        GenerationUnit::new("gasfiredbig1", UnitKind::GasFired, 0.53, 100.0, 460.0),
        GenerationUnit::new("gasfiredbig2", UnitKind::GasFired, 0.53, 100.0, 460.0),
        GenerationUnit::new(
            "gasfiredsomewhatsmaller",
            UnitKind::GasFired,
            0.37,
            40.0,
            210.0,
        ),
        GenerationUnit::new("tj1", UnitKind::TurboJet, 0.3, 0.0, 16.0),
        GenerationUnit::new("windpark1", UnitKind::WindTurbine, 1.0, 0.0, 150.0),
        GenerationUnit::new("windpark2", UnitKind::WindTurbine, 1.0, 0.0, 36.0),
    ]
}

/// Reference fleet at the given load and wind factor.
pub fn reference_scenario(load_mw: f64, wind_factor: f64) -> Scenario {
    Scenario::new(load_mw, default_fuels(), wind_factor, reference_fleet())
}

/// Committed power of `name`, panicking if the unit is missing from the plan.
pub fn power(plan: &DispatchPlan, name: &str) -> f64 {
    plan.get(name)
        .unwrap_or_else(|| panic!("unit {name} missing from plan"))
        .power_mw
}

/// Checks the invariants every feasible plan must hold.
pub fn assert_plan_invariants(scenario: &Scenario, plan: &DispatchPlan) {
    assert_eq!(
        plan.allocations().len(),
        scenario.units.len(),
        "every unit must appear exactly once"
    );
    for unit in &scenario.units {
        let matches = plan
            .allocations()
            .iter()
            .filter(|a| a.name == unit.name)
            .count();
        assert_eq!(matches, 1, "unit {} listed {matches} times", unit.name);
    }

    assert!(
        (plan.committed_mw() - scenario.load_mw).abs() < EPS_MW,
        "committed {} MW for a load of {} MW",
        plan.committed_mw(),
        scenario.load_mw
    );

    for unit in &scenario.units {
        let p = power(plan, &unit.name);
        if unit.kind.is_renewable() {
            let available = scenario.available_wind_mw(unit);
            assert!(
                p >= -EPS_MW && p <= available + EPS_MW,
                "wind unit {} at {p} MW outside [0, {available}]",
                unit.name
            );
        } else {
            let idle = p.abs() < EPS_MW;
            let inside = p >= unit.pmin_mw - EPS_MW && p <= unit.pmax_mw + EPS_MW;
            assert!(
                idle || inside,
                "unit {} at {p} MW outside {{0}} U [{}, {}]",
                unit.name,
                unit.pmin_mw,
                unit.pmax_mw
            );
        }
    }
}
