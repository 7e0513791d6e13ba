//! Error types for component models.

use pf_core::error::PfError;
use thiserror::Error;

/// Errors raised while constructing or validating component inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Invalid geometry: {what} = {value}")]
    InvalidGeometry { what: &'static str, value: f64 },

    #[error("Invalid fluid: {what} = {value}")]
    InvalidFluid { what: &'static str, value: f64 },

    #[error("Invalid fitting: {what} = {value}")]
    InvalidFitting { what: &'static str, value: f64 },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl ComponentError {
    /// Wrap a core range/finiteness failure as a geometry error.
    pub(crate) fn geometry(e: PfError) -> Self {
        let (what, value) = split(e);
        ComponentError::InvalidGeometry { what, value }
    }

    /// Wrap a core range/finiteness failure as a fluid error.
    pub(crate) fn fluid(e: PfError) -> Self {
        let (what, value) = split(e);
        ComponentError::InvalidFluid { what, value }
    }
}

fn split(e: PfError) -> (&'static str, f64) {
    match e {
        PfError::NonFinite { what, value } | PfError::OutOfRange { what, value } => (what, value),
        PfError::InvalidArg { what } | PfError::Invariant { what } => (what, f64::NAN),
    }
}

impl From<ComponentError> for PfError {
    fn from(e: ComponentError) -> Self {
        match e {
            ComponentError::InvalidGeometry { what, value } => PfError::OutOfRange { what, value },
            ComponentError::InvalidFluid { what, value } => PfError::OutOfRange { what, value },
            ComponentError::InvalidFitting { what, value } => PfError::OutOfRange { what, value },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ComponentError::InvalidFluid {
            what: "density",
            value: 0.0,
        };
        assert!(err.to_string().contains("density"));
    }

    #[test]
    fn error_conversion() {
        let comp_err = ComponentError::InvalidFitting {
            what: "opening percent",
            value: 120.0,
        };
        let pf_err: PfError = comp_err.into();
        assert!(matches!(pf_err, PfError::OutOfRange { value, .. } if value == 120.0));
    }

    #[test]
    fn geometry_wraps_core_error() {
        let err = ComponentError::geometry(PfError::OutOfRange {
            what: "diameter",
            value: -0.1,
        });
        assert_eq!(
            err,
            ComponentError::InvalidGeometry {
                what: "diameter",
                value: -0.1
            }
        );
    }
}
