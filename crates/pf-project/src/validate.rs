//! Problem file validation logic.
//!
//! Checks everything that can be decided from the file alone, so that
//! compilation into solver types cannot fail on well-formed input.

use crate::schema::{
    BoundaryDef, FittingDef, FittingPolicyDef, FluidDef, LATEST_VERSION, PipeDef, ProblemFile,
    SolverDef,
};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_problem(file: &ProblemFile) -> Result<(), ValidationError> {
    if file.version == 0 || file.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    validate_pipe(&file.pipe)?;
    if let Some(fluid) = &file.fluid {
        validate_fluid(fluid)?;
    }
    validate_boundary(&file.boundary)?;

    let solver = file.solver.unwrap_or_default();
    validate_solver(&solver)?;

    // permissive files may carry out-of-range fittings; the solver drops them
    for (i, fitting) in file.fittings.iter().enumerate() {
        match solver.fitting_policy {
            FittingPolicyDef::Strict => validate_fitting(i, fitting)?,
            FittingPolicyDef::Permissive => validate_fitting_finite(i, fitting)?,
        }
    }

    Ok(())
}

fn validate_pipe(pipe: &PipeDef) -> Result<(), ValidationError> {
    positive("pipe.diameter_m", pipe.diameter_m)?;
    non_negative("pipe.length_m", pipe.length_m)?;
    non_negative("pipe.roughness_m", pipe.roughness_m)?;
    if pipe.roughness_m >= pipe.diameter_m / 2.0 {
        return Err(invalid(
            "pipe.roughness_m",
            pipe.roughness_m,
            "must be below half the diameter",
        ));
    }
    Ok(())
}

fn validate_fluid(fluid: &FluidDef) -> Result<(), ValidationError> {
    positive("fluid.density_kgpm3", fluid.density_kgpm3)?;
    positive("fluid.viscosity_pas", fluid.viscosity_pas)
}

fn validate_boundary(boundary: &BoundaryDef) -> Result<(), ValidationError> {
    finite("boundary.inlet_pa", boundary.inlet_pa)?;
    finite("boundary.outlet_pa", boundary.outlet_pa)
}

fn validate_solver(solver: &SolverDef) -> Result<(), ValidationError> {
    if solver.max_iterations == Some(0) {
        return Err(invalid("solver.max_iterations", 0, "must be at least 1"));
    }
    if let Some(tol) = solver.velocity_tolerance {
        positive("solver.velocity_tolerance", tol)?;
    }
    if let Some(v0) = solver.initial_velocity {
        non_negative("solver.initial_velocity", v0)?;
    }
    if let Some(f) = solver.direct_friction_factor {
        positive("solver.direct_friction_factor", f)?;
    }
    Ok(())
}

fn validate_fitting(index: usize, fitting: &FittingDef) -> Result<(), ValidationError> {
    match fitting {
        FittingDef::None => Ok(()),
        FittingDef::Valve {
            opening_percent, ..
        } => {
            let field = format!("fittings[{index}].opening_percent");
            if opening_percent.is_finite() && (0.0..=100.0).contains(opening_percent) {
                Ok(())
            } else {
                Err(invalid(field, opening_percent, "must be in [0, 100]"))
            }
        }
        FittingDef::Orifice {
            beta_ratio,
            discharge_coefficient,
        } => {
            if !(beta_ratio.is_finite() && (0.0..=1.0).contains(beta_ratio)) {
                return Err(invalid(
                    format!("fittings[{index}].beta_ratio"),
                    beta_ratio,
                    "must be in [0, 1]",
                ));
            }
            positive(
                &format!("fittings[{index}].discharge_coefficient"),
                *discharge_coefficient,
            )
        }
    }
}

fn validate_fitting_finite(index: usize, fitting: &FittingDef) -> Result<(), ValidationError> {
    match fitting {
        FittingDef::None => Ok(()),
        FittingDef::Valve {
            opening_percent, ..
        } => finite(&format!("fittings[{index}].opening_percent"), *opening_percent),
        FittingDef::Orifice {
            beta_ratio,
            discharge_coefficient,
        } => {
            finite(&format!("fittings[{index}].beta_ratio"), *beta_ratio)?;
            finite(
                &format!("fittings[{index}].discharge_coefficient"),
                *discharge_coefficient,
            )
        }
    }
}

fn invalid(
    field: impl Into<String>,
    value: impl ToString,
    reason: impl Into<String>,
) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite"))
    }
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite and positive"))
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be finite and non-negative"))
    }
}
