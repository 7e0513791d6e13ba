//! Error types for solver operations.

use pf_components::ComponentError;
use pf_core::error::PfError;
use thiserror::Error;

/// Errors that can occur while solving a pipe flow problem.
///
/// Running out of iterations is not an error: see [`crate::FlowState::converged`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Component error: {0}")]
    Component(#[from] ComponentError),

    #[error("Invalid boundary condition: {what} = {value}")]
    InvalidBoundary { what: &'static str, value: f64 },

    #[error("Invalid solver configuration: {what}")]
    InvalidConfig { what: &'static str },

    #[error("Numeric error: {what}")]
    Numeric { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for PfError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::Component(c) => c.into(),
            SolverError::InvalidBoundary { what, value } => PfError::NonFinite { what, value },
            SolverError::InvalidConfig { what } => PfError::InvalidArg { what },
            SolverError::Numeric { what: _ } => PfError::Invariant { what: "numeric" },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_errors_convert() {
        let err: SolverError = ComponentError::InvalidGeometry {
            what: "diameter",
            value: 0.0,
        }
        .into();
        assert!(err.to_string().contains("diameter"));
        let pf: PfError = err.into();
        assert!(matches!(pf, PfError::OutOfRange { what: "diameter", .. }));
    }
}
