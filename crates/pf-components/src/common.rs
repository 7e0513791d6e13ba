//! Common utilities for component calculations.

/// Guard added to resistance-style denominators so a frictionless,
/// unrestricted pipe yields a large but finite flow.
pub const EPSILON_RESISTANCE: f64 = 1e-10;

/// Reynolds numbers at or below this are treated as "no flow" by friction models.
pub const EPSILON_REYNOLDS: f64 = 1e-9;

/// Determine flow direction: 1.0 for forward (inlet > outlet), -1.0 for reverse.
///
/// Returns 0.0 only when the pressures are exactly equal.
pub fn flow_direction(p_inlet: f64, p_outlet: f64) -> f64 {
    pf_core::numeric::sign(p_inlet - p_outlet)
}

/// Circular cross-section area for a diameter (m → m²).
pub fn circle_area(diameter: f64) -> f64 {
    std::f64::consts::PI * diameter * diameter / 4.0
}
