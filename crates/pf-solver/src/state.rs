//! Solver output.

use crate::config::SolveMode;
use pf_components::FlowRegime;
use pf_core::units::constants::M3PS_TO_LPM;
use pf_core::units::{Velocity, VolumeRate};

/// Loss coefficients at the reported operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossBreakdown {
    pub friction: f64,
    pub valve: f64,
    pub orifice: f64,
    /// Sum of the above; +∞ when a valve is closed
    pub total: f64,
}

/// Flow through the pipe at the solved operating point.
///
/// Velocity, flow rate and Reynolds number carry the sign of the pressure
/// difference (positive = inlet → outlet).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    pub velocity: Velocity,
    pub flow_rate: VolumeRate,
    pub reynolds: f64,
    pub regime: FlowRegime,
    pub friction_factor: f64,
    pub losses: LossBreakdown,
    /// Resistance coefficient R = ΔP/Q² (Pa·s²/m⁶)
    pub resistance: f64,
    pub mode: SolveMode,
    /// Fixed-point iterations performed (0 for direct and short-circuit solves)
    pub iterations: usize,
    /// Last |V_new − V| (m/s); 0 when no iteration was needed
    pub last_change: f64,
    /// False when the iteration cap was hit before the tolerance was met
    pub converged: bool,
}

impl FlowState {
    /// Flow rate in litres per minute.
    pub fn flow_rate_lpm(&self) -> f64 {
        self.flow_rate.value * M3PS_TO_LPM
    }

    /// True for fixed-friction (direct) results and for the last iterate of
    /// an unconverged solve.
    pub fn is_approximate(&self) -> bool {
        self.mode == SolveMode::Direct || !self.converged
    }

    /// No flow (equal pressures or a closed valve).
    pub fn is_stagnant(&self) -> bool {
        self.flow_rate.value == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::units::{m3ps, mps};

    fn sample(q: f64, converged: bool) -> FlowState {
        FlowState {
            velocity: mps(q / 0.01),
            flow_rate: m3ps(q),
            reynolds: 0.0,
            regime: FlowRegime::Laminar,
            friction_factor: 0.02,
            losses: LossBreakdown {
                friction: 2.0,
                valve: 0.0,
                orifice: 0.0,
                total: 2.0,
            },
            resistance: 1.0,
            mode: SolveMode::Iterative,
            iterations: 3,
            last_change: 0.0,
            converged,
        }
    }

    #[test]
    fn lpm_conversion() {
        let state = sample(0.1, true);
        assert!((state.flow_rate_lpm() - 6000.0).abs() < 1e-9);
        assert!(!state.is_approximate());
        assert!(!state.is_stagnant());
    }

    #[test]
    fn approximate_flag() {
        assert!(sample(0.0, false).is_approximate());
        assert!(sample(0.0, true).is_stagnant());
    }

    #[test]
    fn direct_results_are_approximate() {
        let state = FlowState {
            mode: SolveMode::Direct,
            iterations: 0,
            ..sample(0.1, true)
        };
        assert!(state.converged);
        assert!(state.is_approximate());
    }
}
