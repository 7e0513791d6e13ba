//! Compile a validated problem file into solver inputs.

use crate::ProjectResult;
use crate::schema::{FittingDef, FittingPolicyDef, ProblemFile, SolveModeDef, SolverDef};
use pf_components::{FittingSpec, FluidProperties, PipeGeometry, ValveType};
use pf_core::units::{kgpm3, m, pa, pas};
use pf_solver::{BoundaryCondition, FittingPolicy, FlowProblem, SolveMode, SolverConfig};

/// Build the runtime problem and solver configuration.
///
/// Geometry and fluid checks run again in the component constructors, so an
/// unvalidated file still fails cleanly.
pub fn compile(file: &ProblemFile) -> ProjectResult<(FlowProblem, SolverConfig)> {
    let pipe = PipeGeometry::new(
        m(file.pipe.diameter_m),
        m(file.pipe.length_m),
        m(file.pipe.roughness_m),
    )?;
    let fluid = match &file.fluid {
        Some(def) => FluidProperties::new(kgpm3(def.density_kgpm3), pas(def.viscosity_pas))?,
        None => FluidProperties::water(),
    };
    let boundary = BoundaryCondition::new(pa(file.boundary.inlet_pa), pa(file.boundary.outlet_pa))?;

    let problem = file
        .fittings
        .iter()
        .map(compile_fitting)
        .fold(FlowProblem::new(pipe, boundary).with_fluid(fluid), |p, f| {
            p.with_fitting(f)
        });

    let config = compile_solver(&file.solver.unwrap_or_default());
    config.validate()?;

    tracing::debug!(
        name = %file.name,
        fittings = problem.fittings.len(),
        mode = ?config.mode,
        "problem compiled"
    );
    Ok((problem, config))
}

pub fn compile_fitting(def: &FittingDef) -> FittingSpec {
    match def {
        FittingDef::None => FittingSpec::None,
        FittingDef::Valve {
            valve_type,
            opening_percent,
        } => FittingSpec::valve(ValveType::from_name(valve_type), *opening_percent),
        FittingDef::Orifice {
            beta_ratio,
            discharge_coefficient,
        } => FittingSpec::Orifice {
            beta_ratio: *beta_ratio,
            discharge_coefficient: *discharge_coefficient,
        },
    }
}

pub fn compile_solver(def: &SolverDef) -> SolverConfig {
    let defaults = SolverConfig::default();
    SolverConfig {
        mode: match def.mode {
            SolveModeDef::Direct => SolveMode::Direct,
            SolveModeDef::Iterative => SolveMode::Iterative,
        },
        max_iterations: def.max_iterations.unwrap_or(defaults.max_iterations),
        velocity_tolerance: def.velocity_tolerance.unwrap_or(defaults.velocity_tolerance),
        initial_velocity: def.initial_velocity.unwrap_or(defaults.initial_velocity),
        direct_friction_factor: def
            .direct_friction_factor
            .unwrap_or(defaults.direct_friction_factor),
        fitting_policy: match def.fitting_policy {
            FittingPolicyDef::Strict => FittingPolicy::Strict,
            FittingPolicyDef::Permissive => FittingPolicy::Permissive,
        },
    }
}
