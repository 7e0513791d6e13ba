//! Single-branch liquid pipe flow solver.
//!
//! Given inlet/outlet pressures, pipe geometry, fluid properties and inline
//! fittings, computes the volumetric flow rate through the pipe. Friction
//! depends on velocity through the Reynolds number, so the reference solve is
//! a bounded fixed-point iteration on velocity; a direct single-shot solve
//! with a fixed friction factor is also available.

pub mod config;
pub mod error;
pub mod fitting_policy;
pub mod problem;
pub mod solve;
pub mod state;

pub use config::{SolveMode, SolverConfig};
pub use error::{SolverError, SolverResult};
pub use fitting_policy::{FittingPolicy, resolve_fittings};
pub use problem::{BoundaryCondition, FlowProblem};
pub use solve::{IterationEvent, solve, solve_batch, solve_with_progress};
pub use state::{FlowState, LossBreakdown};
