//! Inline fittings and their loss coefficients.
//!
//! Fittings are a closed set (none, valve, orifice plate). Each contributes a
//! velocity-independent loss coefficient K that is summed linearly with the
//! friction term.

use crate::error::{ComponentError, ComponentResult};
use std::fmt;

/// Typical discharge coefficient of a sharp-edged orifice plate.
pub const DEFAULT_DISCHARGE_COEFFICIENT: f64 = 0.62;

/// Valve body type, keyed to a published fully-open loss coefficient.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValveType {
    Gate,
    Globe,
    Ball,
    Butterfly,
    Check,
    /// Unrecognized type name. Contributes no restriction when open.
    Other(String),
}

impl ValveType {
    /// Loss coefficient with the valve fully open.
    pub fn fully_open_k(&self) -> f64 {
        match self {
            ValveType::Gate => 0.2,
            ValveType::Globe => 10.0,
            ValveType::Ball => 0.05,
            ValveType::Butterfly => 0.3,
            ValveType::Check => 2.0,
            ValveType::Other(_) => 0.0,
        }
    }

    /// Parse a type name (case-insensitive). Never fails.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "gate" => ValveType::Gate,
            "globe" => ValveType::Globe,
            "ball" => ValveType::Ball,
            "butterfly" => ValveType::Butterfly,
            "check" => ValveType::Check,
            _ => ValveType::Other(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ValveType::Gate => "gate",
            ValveType::Globe => "globe",
            ValveType::Ball => "ball",
            ValveType::Butterfly => "butterfly",
            ValveType::Check => "check",
            ValveType::Other(name) => name,
        }
    }
}

impl fmt::Display for ValveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for ValveType {
    fn from(name: &str) -> Self {
        ValveType::from_name(name)
    }
}

/// Valve loss coefficient at a given opening.
///
/// `K = K_open·(100/p)²` for 0 < p < 100, `K_open` for p ≥ 100, and +∞ for a
/// closed valve (p ≤ 0).
pub fn valve_k(valve_type: &ValveType, opening_percent: f64) -> f64 {
    if !(opening_percent > 0.0) {
        return f64::INFINITY;
    }
    let k_open = valve_type.fully_open_k();
    if opening_percent >= 100.0 {
        k_open
    } else {
        k_open * (100.0 / opening_percent).powi(2)
    }
}

/// Orifice plate loss coefficient `(1 − β⁴)/(Cd²·β⁴)`.
///
/// β outside (0, 1) or a non-positive Cd is a degenerate plate and yields 0.
pub fn orifice_k(beta_ratio: f64, discharge_coefficient: f64) -> f64 {
    if !(beta_ratio > 0.0 && beta_ratio < 1.0) || !(discharge_coefficient > 0.0) {
        return 0.0;
    }
    let beta4 = beta_ratio.powi(4);
    (1.0 - beta4) / (discharge_coefficient * discharge_coefficient * beta4)
}

/// An inline restriction in the pipe.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FittingSpec {
    #[default]
    None,
    Valve {
        valve_type: ValveType,
        /// 0 = closed, 100 = fully open
        opening_percent: f64,
    },
    Orifice {
        /// Bore diameter / pipe diameter
        beta_ratio: f64,
        discharge_coefficient: f64,
    },
}

impl FittingSpec {
    pub fn valve(valve_type: impl Into<ValveType>, opening_percent: f64) -> Self {
        FittingSpec::Valve {
            valve_type: valve_type.into(),
            opening_percent,
        }
    }

    /// Orifice plate with the default discharge coefficient.
    pub fn orifice(beta_ratio: f64) -> Self {
        FittingSpec::Orifice {
            beta_ratio,
            discharge_coefficient: DEFAULT_DISCHARGE_COEFFICIENT,
        }
    }

    /// Loss coefficient of this fitting alone.
    pub fn loss_coefficient(&self) -> f64 {
        match self {
            FittingSpec::None => 0.0,
            FittingSpec::Valve {
                valve_type,
                opening_percent,
            } => valve_k(valve_type, *opening_percent),
            FittingSpec::Orifice {
                beta_ratio,
                discharge_coefficient,
            } => orifice_k(*beta_ratio, *discharge_coefficient),
        }
    }

    /// Reject inputs outside the physically meaningful range.
    ///
    /// - valve opening must lie in [0, 100]
    /// - orifice β must lie in [0, 1] and Cd must be positive
    pub fn validate(&self) -> ComponentResult<()> {
        match self {
            FittingSpec::None => Ok(()),
            FittingSpec::Valve {
                opening_percent, ..
            } => {
                let p = *opening_percent;
                if p.is_finite() && (0.0..=100.0).contains(&p) {
                    Ok(())
                } else {
                    Err(ComponentError::InvalidFitting {
                        what: "valve opening percent",
                        value: p,
                    })
                }
            }
            FittingSpec::Orifice {
                beta_ratio,
                discharge_coefficient,
            } => {
                let beta = *beta_ratio;
                if !(beta.is_finite() && (0.0..=1.0).contains(&beta)) {
                    return Err(ComponentError::InvalidFitting {
                        what: "orifice beta ratio",
                        value: beta,
                    });
                }
                let cd = *discharge_coefficient;
                if !(cd.is_finite() && cd > 0.0) {
                    return Err(ComponentError::InvalidFitting {
                        what: "orifice discharge coefficient",
                        value: cd,
                    });
                }
                Ok(())
            }
        }
    }
}

/// Velocity-independent loss coefficients, summed per fitting kind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FittingLosses {
    pub valve: f64,
    pub orifice: f64,
}

impl FittingLosses {
    /// Sum the loss coefficients of a fitting sequence.
    pub fn from_fittings(fittings: &[FittingSpec]) -> Self {
        fittings
            .iter()
            .fold(FittingLosses::default(), |mut acc, fitting| {
                match fitting {
                    FittingSpec::None => {}
                    FittingSpec::Valve { .. } => acc.valve += fitting.loss_coefficient(),
                    FittingSpec::Orifice { .. } => acc.orifice += fitting.loss_coefficient(),
                }
                acc
            })
    }

    pub fn total(&self) -> f64 {
        self.valve + self.orifice
    }

    /// A closed valve somewhere in the line.
    pub fn is_blocked(&self) -> bool {
        self.total().is_infinite()
    }
}
