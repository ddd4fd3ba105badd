//! Amplification round planning.

use serde::{Deserialize, Serialize};

use crate::error::OracleResult;
use crate::range::check_bounds;

/// Strategy deciding how many oracle+diffuser rounds to apply.
///
/// Kept behind a trait so the coarse linear heuristic can later be swapped
/// for the arcsin-based Grover-optimal formula without touching circuit
/// construction. Implementations are only called with validated bounds.
pub trait IterationPlanner {
    /// Number of amplification rounds for the open interval
    /// `(lower, upper)` over a `width`-qubit register.
    fn iterations(&self, lower: u64, upper: u64, width: u32) -> u32;
}

/// The linear `N/M` heuristic.
///
/// `round(2^width / (upper − lower)) + 1`, floored at 1. A loose proxy for
/// the optimal `(π/4)·sqrt(N/M)` count, biased one round high to favor
/// over-rotation in this coarse regime.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearPlanner;

impl IterationPlanner for LinearPlanner {
    fn iterations(&self, lower: u64, upper: u64, width: u32) -> u32 {
        let n = 2f64.powi(width as i32);
        let m = (upper - lower) as f64;
        let k = (n / m).round() + 1.0;
        if k < 1.0 { 1 } else { k as u32 }
    }
}

/// A fully resolved amplification plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmplificationPlan {
    /// Register width in qubits.
    pub width: u32,
    /// Lower bound (exclusive).
    pub lower: u64,
    /// Upper bound (exclusive).
    pub upper: u64,
    /// Number of oracle+diffuser rounds, always at least 1.
    pub iterations: u32,
}

/// Plan amplification with the default [`LinearPlanner`].
pub fn plan(lower: u64, upper: u64, width: u32) -> OracleResult<AmplificationPlan> {
    plan_with(&LinearPlanner, lower, upper, width)
}

/// Plan amplification with a caller-supplied strategy.
pub fn plan_with(
    planner: &dyn IterationPlanner,
    lower: u64,
    upper: u64,
    width: u32,
) -> OracleResult<AmplificationPlan> {
    check_bounds(lower, upper, width)?;
    Ok(AmplificationPlan {
        width,
        lower,
        upper,
        iterations: planner.iterations(lower, upper, width),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RangeOracleError;

    #[test]
    fn test_linear_heuristic_values() {
        // N=16, M=4: 16/4 = 4, +1 = 5.
        assert_eq!(plan(2, 6, 4).unwrap().iterations, 5);
        // N=16, M=3: 16/3 ≈ 5.33, rounds to 5, +1 = 6.
        assert_eq!(plan(1, 4, 4).unwrap().iterations, 6);
    }

    #[test]
    fn test_iterations_at_least_one() {
        // The widest possible range still gets one round.
        let p = plan(0, 15, 4).unwrap();
        assert!(p.iterations >= 1);
    }

    #[test]
    fn test_plan_validates_bounds() {
        assert!(matches!(
            plan(6, 2, 4),
            Err(RangeOracleError::BoundsOutOfOrder { .. })
        ));
        assert!(matches!(
            plan(0, 20, 4),
            Err(RangeOracleError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_custom_planner() {
        struct Fixed(u32);
        impl IterationPlanner for Fixed {
            fn iterations(&self, _: u64, _: u64, _: u32) -> u32 {
                self.0
            }
        }
        let p = plan_with(&Fixed(3), 2, 6, 4).unwrap();
        assert_eq!(p.iterations, 3);
    }

    #[test]
    fn test_plan_serde_roundtrip() {
        let p = plan(2, 6, 4).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        let back: AmplificationPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
