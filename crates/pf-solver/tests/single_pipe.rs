//! Behavioral tests for the public solve entry points.

use pf_components::{FittingSpec, FluidProperties, PipeGeometry, ValveType};
use pf_core::units::{kgpm3, m, pa, pas};
use pf_solver::{
    BoundaryCondition, FittingPolicy, FlowProblem, SolverConfig, SolverError, solve, solve_batch,
};

fn pipe() -> PipeGeometry {
    PipeGeometry::new(m(0.1), m(10.0), m(0.000045)).unwrap()
}

fn bc(p_in: f64, p_out: f64) -> BoundaryCondition {
    BoundaryCondition::new(pa(p_in), pa(p_out)).unwrap()
}

#[test]
fn symmetric_pressures_give_opposite_flows() {
    let forward = FlowProblem::new(pipe(), bc(200_000.0, 100_000.0));
    let reverse = FlowProblem::new(pipe(), bc(100_000.0, 200_000.0));

    for config in [SolverConfig::direct(), SolverConfig::iterative()] {
        let f = solve(&forward, &config).unwrap();
        let r = solve(&reverse, &config).unwrap();
        assert_eq!(f.flow_rate.value.abs(), r.flow_rate.value.abs());
        assert!(f.flow_rate.value > 0.0 && r.flow_rate.value < 0.0);
        assert_eq!(f.losses, r.losses);
    }
}

#[test]
fn valve_opening_sweep_is_monotonic() {
    let openings = [100.0, 80.0, 60.0, 40.0, 20.0, 10.0, 5.0];
    for config in [SolverConfig::direct(), SolverConfig::iterative()] {
        let mut prev_q = f64::INFINITY;
        let mut prev_k = 0.0;
        for &opening in &openings {
            let problem = FlowProblem::new(pipe(), bc(200_000.0, 100_000.0))
                .with_fitting(FittingSpec::valve(ValveType::Butterfly, opening));
            let state = solve(&problem, &config).unwrap();
            assert!(state.flow_rate.value < prev_q, "opening {opening}%");
            assert!(state.losses.valve > prev_k, "opening {opening}%");
            prev_q = state.flow_rate.value;
            prev_k = state.losses.valve;
        }
    }
}

#[test]
fn closed_valve_zero_flow_for_any_pressure() {
    for (p_in, p_out) in [(200_000.0, 100_000.0), (100_000.0, 900_000.0), (5.0, 0.0)] {
        let problem = FlowProblem::new(pipe(), bc(p_in, p_out))
            .with_fitting(FittingSpec::valve(ValveType::Globe, 0.0));
        for config in [SolverConfig::direct(), SolverConfig::iterative()] {
            let state = solve(&problem, &config).unwrap();
            assert_eq!(state.flow_rate.value, 0.0);
            assert_eq!(state.velocity.value, 0.0);
        }
    }
}

#[test]
fn degenerate_fittings_act_as_plain_pipe() {
    let plain = FlowProblem::new(pipe(), bc(200_000.0, 100_000.0));
    let config = SolverConfig::iterative();
    let expected = solve(&plain, &config).unwrap();

    for fitting in [
        FittingSpec::orifice(0.0),
        FittingSpec::orifice(1.0),
        FittingSpec::valve("needle", 100.0),
    ] {
        let state = solve(&plain.clone().with_fitting(fitting.clone()), &config).unwrap();
        assert_eq!(state.flow_rate, expected.flow_rate, "{fitting:?}");
        assert_eq!(state.losses.valve + state.losses.orifice, 0.0);
    }
}

#[test]
fn frictionless_unrestricted_pipe_stays_finite() {
    let pipe = PipeGeometry::new(m(0.1), m(0.0), m(0.0)).unwrap();
    let problem = FlowProblem::new(pipe, bc(200_000.0, 100_000.0));
    for config in [SolverConfig::direct(), SolverConfig::iterative()] {
        let state = solve(&problem, &config).unwrap();
        assert!(state.flow_rate.value.is_finite());
        assert!(state.flow_rate.value > 0.0);
    }
}

#[test]
fn denser_fluid_flows_less() {
    let water = FlowProblem::new(pipe(), bc(200_000.0, 100_000.0));
    let brine = water
        .clone()
        .with_fluid(FluidProperties::new(kgpm3(1200.0), pas(0.0015)).unwrap());
    let config = SolverConfig::iterative();
    assert!(
        solve(&brine, &config).unwrap().flow_rate.value
            < solve(&water, &config).unwrap().flow_rate.value
    );
}

#[test]
fn invalid_fitting_policy_choice() {
    let problem = FlowProblem::new(pipe(), bc(200_000.0, 100_000.0))
        .with_fitting(FittingSpec::valve(ValveType::Gate, -10.0));

    let strict = solve(&problem, &SolverConfig::iterative());
    assert!(matches!(strict, Err(SolverError::Component(_))));

    let permissive = solve(
        &problem,
        &SolverConfig::iterative().with_fitting_policy(FittingPolicy::Permissive),
    )
    .unwrap();
    assert!(permissive.flow_rate.value > 0.0);
    assert_eq!(permissive.losses.valve, 0.0);
}

#[test]
fn batch_reports_errors_per_problem() {
    let good = FlowProblem::new(pipe(), bc(200_000.0, 100_000.0));
    let bad = good
        .clone()
        .with_fitting(FittingSpec::orifice(2.0));
    let results = solve_batch(&[good.clone(), bad, good], &SolverConfig::default());
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert_eq!(results[0], results[2]);
}
