//! Policy for fitting inputs outside their valid range.
//!
//! Default behavior is strict: an out-of-range valve opening or orifice ratio
//! fails the solve. The permissive policy replaces the offending fitting with
//! "no restriction" so an estimate is still produced.

use pf_components::{ComponentResult, FittingLosses, FittingSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FittingPolicy {
    /// Reject invalid fittings with `InvalidFitting`.
    #[default]
    Strict,
    /// Drop invalid fittings (K = 0) and log a warning.
    Permissive,
}

/// Validate a fitting sequence under `policy` and sum its loss coefficients.
pub fn resolve_fittings(
    fittings: &[FittingSpec],
    policy: FittingPolicy,
) -> ComponentResult<FittingLosses> {
    let mut accepted = Vec::with_capacity(fittings.len());
    for (index, fitting) in fittings.iter().enumerate() {
        match (fitting.validate(), policy) {
            (Ok(()), _) => accepted.push(fitting.clone()),
            (Err(e), FittingPolicy::Strict) => return Err(e),
            (Err(e), FittingPolicy::Permissive) => {
                tracing::warn!(index, error = %e, "ignoring invalid fitting");
            }
        }
    }
    Ok(FittingLosses::from_fittings(&accepted))
}
