//! Darcy friction factor correlations.

use crate::common::EPSILON_REYNOLDS;

/// Reynolds number below which flow is treated as laminar.
pub const LAMINAR_REYNOLDS_LIMIT: f64 = 2300.0;

/// Friction factor used when Re cannot be evaluated (no flow yet, NaN).
/// Also the conservative fixed estimate for direct solves.
pub const FALLBACK_FRICTION_FACTOR: f64 = 0.02;

/// Flow regime as seen by the friction correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Turbulent,
}

impl FlowRegime {
    /// Classify a Reynolds number. Sign is ignored.
    pub fn from_reynolds(reynolds: f64) -> Self {
        if reynolds.abs() < LAMINAR_REYNOLDS_LIMIT {
            FlowRegime::Laminar
        } else {
            FlowRegime::Turbulent
        }
    }
}

/// Darcy friction factor as a function of Reynolds number and relative roughness.
pub trait FrictionModel: Send + Sync {
    /// Friction factor for Reynolds number magnitude `reynolds` and relative roughness ε/D.
    ///
    /// Must return a finite positive value for any input, including Re ≤ 0 or NaN.
    fn friction_factor(&self, reynolds: f64, relative_roughness: f64) -> f64;
}

/// Laminar 64/Re below Re = 2300, Swamee-Jain explicit Colebrook-White above.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwameeJain;

impl FrictionModel for SwameeJain {
    fn friction_factor(&self, reynolds: f64, relative_roughness: f64) -> f64 {
        // also catches NaN
        if !(reynolds > EPSILON_REYNOLDS) || !reynolds.is_finite() {
            return FALLBACK_FRICTION_FACTOR;
        }

        match FlowRegime::from_reynolds(reynolds) {
            FlowRegime::Laminar => 64.0 / reynolds,
            FlowRegime::Turbulent => {
                let a = relative_roughness.max(0.0) / 3.7;
                let b = 5.74 / reynolds.powf(0.9);
                0.25 / (a + b).log10().powi(2)
            }
        }
    }
}

/// Velocity-independent friction factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedFriction(pub f64);

impl Default for FixedFriction {
    fn default() -> Self {
        FixedFriction(FALLBACK_FRICTION_FACTOR)
    }
}

impl FrictionModel for FixedFriction {
    fn friction_factor(&self, _reynolds: f64, _relative_roughness: f64) -> f64 {
        self.0
    }
}
