//! Problem definition for a single pipe segment.

use crate::error::{SolverError, SolverResult};
use pf_components::common::flow_direction;
use pf_components::{FittingSpec, FluidProperties, PipeGeometry};
use pf_core::units::Pressure;

/// Inlet and outlet pressures. Either may be the higher one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryCondition {
    inlet: Pressure,
    outlet: Pressure,
}

impl BoundaryCondition {
    pub fn new(inlet: Pressure, outlet: Pressure) -> SolverResult<Self> {
        if !inlet.value.is_finite() {
            return Err(SolverError::InvalidBoundary {
                what: "inlet pressure",
                value: inlet.value,
            });
        }
        if !outlet.value.is_finite() {
            return Err(SolverError::InvalidBoundary {
                what: "outlet pressure",
                value: outlet.value,
            });
        }
        Ok(Self { inlet, outlet })
    }

    pub fn inlet(&self) -> Pressure {
        self.inlet
    }

    pub fn outlet(&self) -> Pressure {
        self.outlet
    }

    /// Driving pressure difference inlet − outlet (Pa).
    pub fn delta_p(&self) -> f64 {
        self.inlet.value - self.outlet.value
    }

    /// +1 for inlet → outlet flow, -1 for reverse, 0 for equal pressures.
    pub fn direction(&self) -> f64 {
        flow_direction(self.inlet.value, self.outlet.value)
    }

    /// Same pressures with inlet and outlet exchanged.
    pub fn reversed(&self) -> Self {
        Self {
            inlet: self.outlet,
            outlet: self.inlet,
        }
    }
}

/// Everything a solve needs apart from solver settings.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowProblem {
    pub pipe: PipeGeometry,
    pub fluid: FluidProperties,
    pub boundary: BoundaryCondition,
    /// Inline fittings; their loss coefficients add linearly
    pub fittings: Vec<FittingSpec>,
}

impl FlowProblem {
    /// Plain pipe carrying water, no fittings.
    pub fn new(pipe: PipeGeometry, boundary: BoundaryCondition) -> Self {
        Self {
            pipe,
            fluid: FluidProperties::water(),
            boundary,
            fittings: Vec::new(),
        }
    }

    pub fn with_fluid(mut self, fluid: FluidProperties) -> Self {
        self.fluid = fluid;
        self
    }

    /// Add a fitting. `FittingSpec::None` is accepted and contributes nothing.
    pub fn with_fitting(mut self, fitting: FittingSpec) -> Self {
        if fitting != FittingSpec::None {
            self.fittings.push(fitting);
        }
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryCondition) -> Self {
        self.boundary = boundary;
        self
    }
}
