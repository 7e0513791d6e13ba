//! Solver configuration.

use crate::error::{SolverError, SolverResult};
use crate::fitting_policy::FittingPolicy;
use pf_components::friction::FALLBACK_FRICTION_FACTOR;

/// How the friction/velocity coupling is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolveMode {
    /// Fixed friction factor, single closed-form evaluation.
    Direct,
    /// Fixed-point iteration on velocity with a Re-dependent friction factor.
    #[default]
    Iterative,
}

/// Solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub mode: SolveMode,
    /// Iteration cap for [`SolveMode::Iterative`]
    pub max_iterations: usize,
    /// Absolute velocity change (m/s) below which iteration stops
    pub velocity_tolerance: f64,
    /// Starting velocity estimate (m/s)
    pub initial_velocity: f64,
    /// Friction factor used by [`SolveMode::Direct`]
    pub direct_friction_factor: f64,
    /// Handling of out-of-range fitting inputs
    pub fitting_policy: FittingPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            mode: SolveMode::Iterative,
            max_iterations: 20,
            velocity_tolerance: 1e-6,
            initial_velocity: 1.0,
            direct_friction_factor: FALLBACK_FRICTION_FACTOR,
            fitting_policy: FittingPolicy::Strict,
        }
    }
}

impl SolverConfig {
    pub fn direct() -> Self {
        Self {
            mode: SolveMode::Direct,
            ..Self::default()
        }
    }

    pub fn iterative() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_fitting_policy(mut self, policy: FittingPolicy) -> Self {
        self.fitting_policy = policy;
        self
    }

    pub fn validate(&self) -> SolverResult<()> {
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidConfig {
                what: "max_iterations must be at least 1",
            });
        }
        if !(self.velocity_tolerance.is_finite() && self.velocity_tolerance > 0.0) {
            return Err(SolverError::InvalidConfig {
                what: "velocity_tolerance must be finite and positive",
            });
        }
        if !(self.initial_velocity.is_finite() && self.initial_velocity >= 0.0) {
            return Err(SolverError::InvalidConfig {
                what: "initial_velocity must be finite and non-negative",
            });
        }
        if !(self.direct_friction_factor.is_finite() && self.direct_friction_factor > 0.0) {
            return Err(SolverError::InvalidConfig {
                what: "direct_friction_factor must be finite and positive",
            });
        }
        Ok(())
    }
}
