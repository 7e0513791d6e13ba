//! pf-components: loss models for a single liquid-filled pipe segment.
//!
//! Provides:
//! - Pipe geometry and fluid properties (validated at construction)
//! - Darcy friction factor correlations
//! - Fitting loss coefficients (valves, orifice plates)
//! - Resistance aggregation (friction K + fitting K → resistance R)
//!
//! All models are pure functions of their inputs, suitable for parallel use.
//!
//! # Example
//!
//! ```
//! use pf_components::{
//!     FittingLosses, FittingSpec, FluidProperties, PipeGeometry, ResistanceAggregator,
//!     SwameeJain, ValveType,
//! };
//! use pf_core::units::m;
//!
//! let pipe = PipeGeometry::new(m(0.1), m(10.0), m(0.000045)).unwrap();
//! let fluid = FluidProperties::water();
//! let fittings = FittingLosses::from_fittings(&[FittingSpec::valve(ValveType::Gate, 50.0)]);
//!
//! let agg = ResistanceAggregator::new(&pipe, &fluid, fittings);
//! let eval = agg.evaluate(2.0, &SwameeJain);
//! assert!(eval.k_total > eval.k_valve);
//! ```

pub mod common;
pub mod error;
pub mod fitting;
pub mod fluid;
pub mod friction;
pub mod pipe;
pub mod resistance;

// Re-exports
pub use error::{ComponentError, ComponentResult};
pub use fitting::{DEFAULT_DISCHARGE_COEFFICIENT, FittingLosses, FittingSpec, ValveType};
pub use fluid::FluidProperties;
pub use friction::{FixedFriction, FlowRegime, FrictionModel, SwameeJain};
pub use pipe::PipeGeometry;
pub use resistance::{ResistanceAggregator, ResistanceEval};
