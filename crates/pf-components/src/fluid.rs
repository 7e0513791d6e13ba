//! Incompressible Newtonian fluid properties.

use crate::error::{ComponentError, ComponentResult};
use pf_core::numeric::ensure_positive;
use pf_core::units::constants::{WATER_DENSITY_KGPM3, WATER_VISCOSITY_PAS};
use pf_core::units::{Density, DynVisc, kgpm3, pas};

/// Constant density and dynamic viscosity for one solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    density: Density,
    viscosity: DynVisc,
}

impl FluidProperties {
    /// Create fluid properties. Both values must be finite and positive.
    pub fn new(density: Density, viscosity: DynVisc) -> ComponentResult<Self> {
        ensure_positive(density.value, "density").map_err(ComponentError::fluid)?;
        ensure_positive(viscosity.value, "viscosity").map_err(ComponentError::fluid)?;
        Ok(Self { density, viscosity })
    }

    /// Water at standard conditions (998 kg/m³, 0.001 Pa·s).
    pub fn water() -> Self {
        Self {
            density: kgpm3(WATER_DENSITY_KGPM3),
            viscosity: pas(WATER_VISCOSITY_PAS),
        }
    }

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn viscosity(&self) -> DynVisc {
        self.viscosity
    }
}

impl Default for FluidProperties {
    fn default() -> Self {
        Self::water()
    }
}
