//! Resistance aggregation: friction K + fitting K → total K → resistance R.
//!
//! ```text
//! K_total = f(Re, ε/D)·(L/D) + K_valve + K_orifice
//! R       = K_total·ρ / (2·A²)          so that  ΔP = R·Q²
//! ```

use crate::common::EPSILON_RESISTANCE;
use crate::fitting::FittingLosses;
use crate::fluid::FluidProperties;
use crate::friction::{FlowRegime, FrictionModel};
use crate::pipe::PipeGeometry;

/// Resistance breakdown at one velocity estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceEval {
    /// Reynolds number magnitude used for the friction lookup
    pub reynolds: f64,
    pub regime: FlowRegime,
    pub friction_factor: f64,
    pub k_friction: f64,
    pub k_valve: f64,
    pub k_orifice: f64,
    pub k_total: f64,
    /// Resistance coefficient R (Pa·s²/m⁶)
    pub resistance: f64,
}

/// Combines the velocity-dependent friction loss with the fitting losses of
/// one pipe segment.
///
/// Fitting losses are computed once by the caller and cached here for the
/// whole solve.
#[derive(Debug, Clone, Copy)]
pub struct ResistanceAggregator<'a> {
    pipe: &'a PipeGeometry,
    fluid: &'a FluidProperties,
    fittings: FittingLosses,
    area: f64,
}

impl<'a> ResistanceAggregator<'a> {
    pub fn new(pipe: &'a PipeGeometry, fluid: &'a FluidProperties, fittings: FittingLosses) -> Self {
        Self {
            pipe,
            fluid,
            fittings,
            area: pipe.area().value,
        }
    }

    pub fn fittings(&self) -> FittingLosses {
        self.fittings
    }

    /// Pipe cross-section (m²).
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Evaluate the resistance at a velocity estimate (m/s, sign ignored).
    pub fn evaluate(&self, velocity: f64, friction: &dyn FrictionModel) -> ResistanceEval {
        let reynolds = self.pipe.reynolds(self.fluid, velocity.abs());
        let friction_factor = friction.friction_factor(reynolds, self.pipe.relative_roughness());
        let k_friction = friction_factor * self.pipe.length_over_diameter();
        let k_total = k_friction + self.fittings.total();

        ResistanceEval {
            reynolds,
            regime: FlowRegime::from_reynolds(reynolds),
            friction_factor,
            k_friction,
            k_valve: self.fittings.valve,
            k_orifice: self.fittings.orifice,
            k_total,
            resistance: self.resistance_from_k(k_total),
        }
    }

    /// `R = K·ρ/(2·A²)`.
    pub fn resistance_from_k(&self, k_total: f64) -> f64 {
        k_total * self.fluid.density().value / (2.0 * self.area * self.area)
    }

    /// Mean velocity magnitude that drops `dp_abs` across `k_total`:
    /// `V = sqrt(2·|ΔP| / (K·ρ + ε))`.
    pub fn velocity_from_k(&self, dp_abs: f64, k_total: f64) -> f64 {
        (2.0 * dp_abs / (k_total * self.fluid.density().value + EPSILON_RESISTANCE)).sqrt()
    }
}

/// Flow magnitude through a resistance: `Q = sqrt(|ΔP| / (R + ε))`.
pub fn flow_from_resistance(dp_abs: f64, resistance: f64) -> f64 {
    (dp_abs / (resistance + EPSILON_RESISTANCE)).sqrt()
}
