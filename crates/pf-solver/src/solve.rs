//! High-level solver interface.
//!
//! Both modes work on magnitudes (|ΔP|, |V|) and restore the flow direction
//! from the sign of ΔP at the end, so reversing the boundary pressures
//! reverses the result exactly.

use crate::config::{SolveMode, SolverConfig};
use crate::error::{SolverError, SolverResult};
use crate::fitting_policy::resolve_fittings;
use crate::problem::FlowProblem;
use crate::state::{FlowState, LossBreakdown};
use pf_components::resistance::flow_from_resistance;
use pf_components::{FixedFriction, FlowRegime, ResistanceAggregator, ResistanceEval, SwameeJain};
use pf_core::units::{m3ps, mps};
use rayon::prelude::*;

/// One fixed-point iteration, reported to a progress observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationEvent {
    /// 1-based iteration number
    pub iteration: usize,
    /// Velocity estimate the iteration started from (m/s)
    pub velocity: f64,
    /// Velocity implied by the resistance at `velocity` (m/s)
    pub next_velocity: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub k_total: f64,
}

impl IterationEvent {
    /// |V_new − V|
    pub fn change(&self) -> f64 {
        (self.next_velocity - self.velocity).abs()
    }
}

/// Solve a pipe flow problem.
///
/// # Errors
/// - invalid configuration
/// - invalid fitting under [`crate::FittingPolicy::Strict`]
/// - a non-finite result (should not happen for validated inputs)
///
/// Hitting the iteration cap is not an error; check [`FlowState::converged`].
pub fn solve(problem: &FlowProblem, config: &SolverConfig) -> SolverResult<FlowState> {
    solve_internal(problem, config, None)
}

/// Solve with a callback invoked once per fixed-point iteration.
///
/// Direct and short-circuit solves emit no events.
pub fn solve_with_progress(
    problem: &FlowProblem,
    config: &SolverConfig,
    progress: &mut dyn FnMut(IterationEvent),
) -> SolverResult<FlowState> {
    solve_internal(problem, config, Some(progress))
}

/// Solve independent problems in parallel. Results keep input order.
pub fn solve_batch(problems: &[FlowProblem], config: &SolverConfig) -> Vec<SolverResult<FlowState>> {
    problems.par_iter().map(|p| solve(p, config)).collect()
}

fn solve_internal(
    problem: &FlowProblem,
    config: &SolverConfig,
    progress: Option<&mut dyn FnMut(IterationEvent)>,
) -> SolverResult<FlowState> {
    config.validate()?;

    let fittings = resolve_fittings(&problem.fittings, config.fitting_policy)?;
    let agg = ResistanceAggregator::new(&problem.pipe, &problem.fluid, fittings);
    let dp = problem.boundary.delta_p();

    // subnormal |ΔP| would underflow to zero flow anyway
    if dp.abs() < f64::MIN_POSITIVE || fittings.is_blocked() {
        tracing::debug!(dp, blocked = fittings.is_blocked(), "no flow, skipping solve");
        let friction = direct_friction(config);
        let eval = match config.mode {
            SolveMode::Direct => agg.evaluate(0.0, &friction),
            SolveMode::Iterative => agg.evaluate(0.0, &SwameeJain),
        };
        return Ok(stagnant_state(eval, config.mode));
    }

    let state = match config.mode {
        SolveMode::Direct => solve_direct(problem, &agg, dp, config),
        SolveMode::Iterative => solve_iterative(problem, &agg, dp, config, progress),
    };
    check_state(&state)?;

    tracing::debug!(
        mode = ?state.mode,
        flow_m3ps = state.flow_rate.value,
        reynolds = state.reynolds,
        iterations = state.iterations,
        converged = state.converged,
        "pipe flow solved"
    );
    Ok(state)
}

fn direct_friction(config: &SolverConfig) -> FixedFriction {
    FixedFriction(config.direct_friction_factor)
}

/// Fixed friction factor, `Q = sign(ΔP)·sqrt(|ΔP| / (R + ε))`.
fn solve_direct(
    problem: &FlowProblem,
    agg: &ResistanceAggregator<'_>,
    dp: f64,
    config: &SolverConfig,
) -> FlowState {
    let eval = agg.evaluate(0.0, &direct_friction(config));
    let q = problem.boundary.direction() * flow_from_resistance(dp.abs(), eval.resistance);
    let v = q / agg.area();
    let reynolds = problem.pipe.reynolds(&problem.fluid, v);

    FlowState {
        velocity: mps(v),
        flow_rate: m3ps(q),
        reynolds,
        regime: FlowRegime::from_reynolds(reynolds),
        friction_factor: eval.friction_factor,
        losses: losses(&eval),
        resistance: eval.resistance,
        mode: SolveMode::Direct,
        iterations: 0,
        last_change: 0.0,
        converged: true,
    }
}

/// Fixed-point iteration `V ← sqrt(2·|ΔP| / (K(V)·ρ + ε))`.
fn solve_iterative(
    problem: &FlowProblem,
    agg: &ResistanceAggregator<'_>,
    dp: f64,
    config: &SolverConfig,
    mut progress: Option<&mut dyn FnMut(IterationEvent)>,
) -> FlowState {
    let dp_abs = dp.abs();
    let mut v = config.initial_velocity;
    let mut last_change = f64::INFINITY;
    let mut outcome = None;

    for iteration in 1..=config.max_iterations {
        let eval = agg.evaluate(v, &SwameeJain);
        let next_velocity = agg.velocity_from_k(dp_abs, eval.k_total);
        last_change = (next_velocity - v).abs();

        tracing::trace!(
            iteration,
            velocity = v,
            next_velocity,
            reynolds = eval.reynolds,
            friction_factor = eval.friction_factor,
            "fixed-point iteration"
        );
        if let Some(cb) = progress.as_mut() {
            cb(IterationEvent {
                iteration,
                velocity: v,
                next_velocity,
                reynolds: eval.reynolds,
                friction_factor: eval.friction_factor,
                k_total: eval.k_total,
            });
        }

        if last_change < config.velocity_tolerance {
            outcome = Some((eval, iteration));
            break;
        }
        v = next_velocity;
    }

    let (eval, iterations, converged) = match outcome {
        Some((eval, iterations)) => (eval, iterations, true),
        None => {
            tracing::warn!(
                max_iterations = config.max_iterations,
                last_change,
                tolerance = config.velocity_tolerance,
                "velocity iteration did not converge, returning last iterate"
            );
            // report K and f consistent with the returned velocity
            (agg.evaluate(v, &SwameeJain), config.max_iterations, false)
        }
    };

    let velocity = problem.boundary.direction() * v;
    let reynolds = problem.pipe.reynolds(&problem.fluid, velocity);

    FlowState {
        velocity: mps(velocity),
        flow_rate: m3ps(velocity * agg.area()),
        reynolds,
        regime: eval.regime,
        friction_factor: eval.friction_factor,
        losses: losses(&eval),
        resistance: eval.resistance,
        mode: SolveMode::Iterative,
        iterations,
        last_change,
        converged,
    }
}

fn stagnant_state(eval: ResistanceEval, mode: SolveMode) -> FlowState {
    FlowState {
        velocity: mps(0.0),
        flow_rate: m3ps(0.0),
        reynolds: 0.0,
        regime: FlowRegime::Laminar,
        friction_factor: eval.friction_factor,
        losses: losses(&eval),
        resistance: eval.resistance,
        mode,
        iterations: 0,
        last_change: 0.0,
        converged: true,
    }
}

fn losses(eval: &ResistanceEval) -> LossBreakdown {
    LossBreakdown {
        friction: eval.k_friction,
        valve: eval.k_valve,
        orifice: eval.k_orifice,
        total: eval.k_total,
    }
}

fn check_state(state: &FlowState) -> SolverResult<()> {
    for (what, value) in [
        ("velocity", state.velocity.value),
        ("flow rate", state.flow_rate.value),
        ("Reynolds number", state.reynolds),
        ("friction factor", state.friction_factor),
    ] {
        if !value.is_finite() {
            return Err(SolverError::Numeric {
                what: format!("{what} is not finite ({value})"),
            });
        }
    }
    Ok(())
}
