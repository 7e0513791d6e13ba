//! Problem file schema definitions.

use serde::{Deserialize, Serialize};

/// Current problem file format version.
pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProblemFile {
    pub version: u32,
    pub name: String,
    pub pipe: PipeDef,
    /// Water at standard conditions when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluid: Option<FluidDef>,
    pub boundary: BoundaryDef,
    #[serde(default)]
    pub fittings: Vec<FittingDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solver: Option<SolverDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PipeDef {
    pub diameter_m: f64,
    pub length_m: f64,
    #[serde(default = "default_roughness")]
    pub roughness_m: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FluidDef {
    pub density_kgpm3: f64,
    pub viscosity_pas: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundaryDef {
    pub inlet_pa: f64,
    pub outlet_pa: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum FittingDef {
    None,
    Valve {
        /// gate, globe, ball, butterfly, check; anything else has no loss
        valve_type: String,
        opening_percent: f64,
    },
    Orifice {
        beta_ratio: f64,
        #[serde(default = "default_discharge_coefficient")]
        discharge_coefficient: f64,
    },
}

/// Optional solver overrides. Unset fields keep the solver defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct SolverDef {
    #[serde(default)]
    pub mode: SolveModeDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity_tolerance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_velocity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_friction_factor: Option<f64>,
    #[serde(default)]
    pub fitting_policy: FittingPolicyDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SolveModeDef {
    Direct,
    #[default]
    Iterative,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FittingPolicyDef {
    #[default]
    Strict,
    Permissive,
}

fn default_roughness() -> f64 {
    pf_components::pipe::COMMERCIAL_STEEL_ROUGHNESS
}

fn default_discharge_coefficient() -> f64 {
    pf_components::DEFAULT_DISCHARGE_COEFFICIENT
}
