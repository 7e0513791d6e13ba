//! Reference scenarios: water through commercial steel pipe, 100 kPa drop
//! unless noted. Expected values follow from the closed-form loss models.

use pf_components::{FittingSpec, PipeGeometry, ValveType};
use pf_core::units::{m, pa};
use pf_core::{Tolerances, nearly_equal};
use pf_solver::{BoundaryCondition, FlowProblem, SolveMode, SolverConfig, solve};

struct Case {
    name: &'static str,
    diameter: f64,
    length: f64,
    p_in: f64,
    fitting: FittingSpec,
    k_total_direct: f64,
    lpm_direct: f64,
    lpm_iterative: f64,
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "simple_pipe",
            diameter: 0.1,
            length: 10.0,
            p_in: 200_000.0,
            fitting: FittingSpec::None,
            k_total_direct: 2.0,
            lpm_direct: 4717.1084,
            lpm_iterative: 5130.2429,
        },
        Case {
            name: "long_pipe",
            diameter: 0.1,
            length: 100.0,
            p_in: 200_000.0,
            fitting: FittingSpec::None,
            k_total_direct: 20.0,
            lpm_direct: 1491.6807,
            lpm_iterative: 1576.9761,
        },
        Case {
            name: "small_diameter",
            diameter: 0.025,
            length: 10.0,
            p_in: 200_000.0,
            fitting: FittingSpec::None,
            k_total_direct: 8.0,
            lpm_direct: 147.4096,
            lpm_iterative: 132.8914,
        },
        Case {
            name: "high_pressure_drop",
            diameter: 0.1,
            length: 10.0,
            p_in: 500_000.0,
            fitting: FittingSpec::None,
            k_total_direct: 2.0,
            lpm_direct: 9434.2169,
            lpm_iterative: 10343.9507,
        },
        Case {
            name: "gate_valve_open",
            diameter: 0.1,
            length: 10.0,
            p_in: 200_000.0,
            fitting: FittingSpec::valve(ValveType::Gate, 100.0),
            k_total_direct: 2.2,
            lpm_direct: 4497.5864,
            lpm_iterative: 4847.5496,
        },
        Case {
            name: "gate_valve_half",
            diameter: 0.1,
            length: 10.0,
            p_in: 200_000.0,
            fitting: FittingSpec::valve(ValveType::Gate, 50.0),
            k_total_direct: 2.8,
            lpm_direct: 3986.6843,
            lpm_iterative: 4217.6897,
        },
        Case {
            name: "globe_valve_open",
            diameter: 0.1,
            length: 10.0,
            p_in: 200_000.0,
            fitting: FittingSpec::valve(ValveType::Globe, 100.0),
            k_total_direct: 12.0,
            lpm_direct: 1925.7515,
            lpm_iterative: 1944.8838,
        },
        Case {
            name: "orifice_50pct",
            diameter: 0.1,
            length: 10.0,
            p_in: 200_000.0,
            fitting: FittingSpec::orifice(0.5),
            k_total_direct: 41.021852,
            lpm_direct: 1041.5574,
            lpm_iterative: 1043.4746,
        },
        Case {
            name: "orifice_70pct",
            diameter: 0.1,
            length: 10.0,
            p_in: 200_000.0,
            fitting: FittingSpec::orifice(0.7),
            k_total_direct: 10.233432,
            lpm_direct: 2085.3560,
            lpm_iterative: 2110.6188,
        },
    ]
}

fn problem(case: &Case) -> FlowProblem {
    let pipe = PipeGeometry::new(m(case.diameter), m(case.length), m(0.000045)).unwrap();
    let bc = BoundaryCondition::new(pa(case.p_in), pa(100_000.0)).unwrap();
    FlowProblem::new(pipe, bc).with_fitting(case.fitting.clone())
}

#[test]
fn direct_mode_matches_closed_form() {
    for case in cases() {
        let state = solve(&problem(&case), &SolverConfig::direct()).unwrap();
        assert_eq!(state.mode, SolveMode::Direct);
        assert!(
            (state.losses.total - case.k_total_direct).abs() < 1e-6,
            "{}: K = {}",
            case.name,
            state.losses.total
        );
        assert!(
            (state.flow_rate_lpm() - case.lpm_direct).abs() < 1e-3,
            "{}: {} L/min",
            case.name,
            state.flow_rate_lpm()
        );
    }
}

#[test]
fn iterative_mode_converges_on_every_case() {
    for case in cases() {
        let state = solve(&problem(&case), &SolverConfig::iterative()).unwrap();
        assert!(state.converged, "{} did not converge", case.name);
        assert!(state.iterations <= 20);
        let tol = Tolerances { abs: 0.0, rel: 1e-6 };
        assert!(
            nearly_equal(state.flow_rate_lpm(), case.lpm_iterative, tol),
            "{}: {} L/min",
            case.name,
            state.flow_rate_lpm()
        );
    }
}

#[test]
fn direct_mode_within_twenty_percent_of_iterative() {
    for case in cases() {
        let direct = solve(&problem(&case), &SolverConfig::direct()).unwrap();
        let iterative = solve(&problem(&case), &SolverConfig::iterative()).unwrap();
        let diff = (direct.flow_rate.value - iterative.flow_rate.value).abs()
            / iterative.flow_rate.value;
        assert!(diff < 0.20, "{}: {:.1}%", case.name, diff * 100.0);
    }
}

#[test]
fn fittings_reduce_flow_relative_to_plain_pipe() {
    let all = cases();
    let plain = &all[0];
    let plain_q = solve(&problem(plain), &SolverConfig::iterative())
        .unwrap()
        .flow_rate
        .value;
    for case in all.iter().filter(|c| c.fitting != FittingSpec::None) {
        let q = solve(&problem(case), &SolverConfig::iterative())
            .unwrap()
            .flow_rate
            .value;
        assert!(q < plain_q, "{} should restrict flow", case.name);
    }
}
