//! Pipe segment geometry.

use crate::common::circle_area;
use crate::error::{ComponentError, ComponentResult};
use crate::fluid::FluidProperties;
use pf_core::numeric::{ensure_non_negative, ensure_positive};
use pf_core::units::{Area, Length, m2};

/// Absolute roughness of commercial steel (m).
pub const COMMERCIAL_STEEL_ROUGHNESS: f64 = 0.000_045;

/// Straight pipe segment with a circular bore.
///
/// Validated once at construction and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeGeometry {
    diameter: Length,
    length: Length,
    roughness: Length,
}

impl PipeGeometry {
    /// Create a pipe segment.
    ///
    /// Diameter must be positive; length and absolute roughness must be
    /// non-negative. All values must be finite. Roughness must stay below
    /// half the diameter, beyond which the friction correlation is meaningless.
    pub fn new(diameter: Length, length: Length, roughness: Length) -> ComponentResult<Self> {
        ensure_positive(diameter.value, "diameter").map_err(ComponentError::geometry)?;
        ensure_non_negative(length.value, "length").map_err(ComponentError::geometry)?;
        ensure_non_negative(roughness.value, "roughness").map_err(ComponentError::geometry)?;
        if roughness.value >= diameter.value / 2.0 {
            return Err(ComponentError::InvalidGeometry {
                what: "roughness",
                value: roughness.value,
            });
        }
        Ok(Self {
            diameter,
            length,
            roughness,
        })
    }

    pub fn diameter(&self) -> Length {
        self.diameter
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn roughness(&self) -> Length {
        self.roughness
    }

    /// Flow cross-section πD²/4.
    pub fn area(&self) -> Area {
        m2(circle_area(self.diameter.value))
    }

    /// Friction length term L/D.
    pub fn length_over_diameter(&self) -> f64 {
        self.length.value / self.diameter.value
    }

    /// Relative roughness ε/D.
    pub fn relative_roughness(&self) -> f64 {
        self.roughness.value / self.diameter.value
    }

    /// Reynolds number ρ·V·D/μ for a (signed) mean velocity in m/s.
    pub fn reynolds(&self, fluid: &FluidProperties, velocity: f64) -> f64 {
        fluid.density().value * velocity * self.diameter.value / fluid.viscosity().value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::units::m;

    #[test]
    fn derived_terms() {
        let pipe = PipeGeometry::new(m(0.1), m(10.0), m(COMMERCIAL_STEEL_ROUGHNESS)).unwrap();
        assert!((pipe.length_over_diameter() - 100.0).abs() < 1e-12);
        assert!((pipe.relative_roughness() - 0.00045).abs() < 1e-15);
        assert!((pipe.area().value - 0.007_853_981_633_974_483).abs() < 1e-15);
    }

    #[test]
    fn reynolds_for_water() {
        let pipe = PipeGeometry::new(m(0.1), m(10.0), m(0.0)).unwrap();
        let re = pipe.reynolds(&FluidProperties::water(), 1.0);
        assert!((re - 99_800.0).abs() < 1e-6);
        let re_rev = pipe.reynolds(&FluidProperties::water(), -1.0);
        assert_eq!(re_rev, -re);
    }

    #[test]
    fn roughness_must_stay_below_half_diameter() {
        assert!(PipeGeometry::new(m(0.1), m(10.0), m(0.049)).is_ok());
        for eps in [0.05, 0.1, 0.37] {
            assert!(matches!(
                PipeGeometry::new(m(0.1), m(10.0), m(eps)),
                Err(ComponentError::InvalidGeometry {
                    what: "roughness",
                    ..
                })
            ));
        }
    }

    #[test]
    fn zero_length_is_allowed() {
        let pipe = PipeGeometry::new(m(0.05), m(0.0), m(0.0)).unwrap();
        assert_eq!(pipe.length_over_diameter(), 0.0);
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(matches!(
            PipeGeometry::new(m(0.0), m(1.0), m(0.0)),
            Err(ComponentError::InvalidGeometry {
                what: "diameter",
                ..
            })
        ));
        assert!(matches!(
            PipeGeometry::new(m(-0.1), m(1.0), m(0.0)),
            Err(ComponentError::InvalidGeometry { .. })
        ));
        assert!(matches!(
            PipeGeometry::new(m(0.1), m(-1.0), m(0.0)),
            Err(ComponentError::InvalidGeometry { what: "length", .. })
        ));
        assert!(matches!(
            PipeGeometry::new(m(0.1), m(1.0), m(-1e-6)),
            Err(ComponentError::InvalidGeometry {
                what: "roughness",
                ..
            })
        ));
        assert!(PipeGeometry::new(m(f64::NAN), m(1.0), m(0.0)).is_err());
    }
}
