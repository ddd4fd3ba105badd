//! Range oracle composition.

use tracing::debug;

use qrange_ir::{Circuit, QubitId, ascending};

use crate::codec::{Number, max_value};
use crate::comparator::{global_phase, greater_than, less_than};
use crate::error::{OracleResult, RangeOracleError};

/// Validate a `(lower, upper)` bound pair against a register width.
pub(crate) fn check_bounds(lower: u64, upper: u64, width: u32) -> OracleResult<()> {
    if width == 0 {
        return Err(RangeOracleError::ZeroWidth);
    }
    for value in [lower, upper] {
        if value > max_value(width) {
            return Err(RangeOracleError::OutOfRange { value, width });
        }
    }
    if lower >= upper {
        return Err(RangeOracleError::BoundsOutOfOrder { lower, upper });
    }
    Ok(())
}

/// Build the oracle marking every basis state strictly between `lower` and
/// `upper`.
///
/// Composition: `greater_than(lower)`, then `less_than(upper)`, then one
/// global-phase correction. The two comparators each flip the sign of
/// their half-space; states inside the open interval collect both flips
/// and the correction leaves them at −1 while everything outside returns
/// to +1, so the net effect is an exact ±1 diagonal.
pub fn range_oracle(
    lower: impl Into<Number>,
    upper: impl Into<Number>,
    width: u32,
) -> OracleResult<Circuit> {
    let lower = lower.into().value();
    let upper = upper.into().value();
    check_bounds(lower, upper, width)?;
    debug!(lower, upper, width, "building range oracle");

    let mut circuit = Circuit::with_size(format!("range_{lower}_{upper}"), width, 0);
    let map = ascending(width);
    circuit.inline(&greater_than(lower, width)?, &map)?;
    circuit.inline(&less_than(upper, width)?, &map)?;
    circuit.inline(&global_phase()?, &[QubitId(0)])?;
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_validation() {
        assert!(check_bounds(2, 6, 4).is_ok());
        assert!(matches!(
            check_bounds(6, 2, 4),
            Err(RangeOracleError::BoundsOutOfOrder { lower: 6, upper: 2 })
        ));
        assert!(matches!(
            check_bounds(3, 3, 4),
            Err(RangeOracleError::BoundsOutOfOrder { .. })
        ));
        assert!(matches!(
            check_bounds(2, 16, 4),
            Err(RangeOracleError::OutOfRange {
                value: 16,
                width: 4
            })
        ));
        assert!(matches!(
            check_bounds(0, 1, 0),
            Err(RangeOracleError::ZeroWidth)
        ));
    }

    #[test]
    fn test_range_oracle_builds() {
        let circuit = range_oracle(2u64, 6u64, 4).unwrap();
        assert_eq!(circuit.num_qubits(), 4);
        assert!(!circuit.is_empty());
    }

    #[test]
    fn test_range_oracle_deterministic() {
        assert_eq!(
            range_oracle(2u64, 6u64, 4).unwrap(),
            range_oracle(2u64, 6u64, 4).unwrap()
        );
    }

    #[test]
    fn test_adjacent_bounds_mark_nothing_but_build() {
        // The open interval (3, 4) is empty; still a valid oracle.
        let circuit = range_oracle(3u64, 4u64, 4).unwrap();
        assert_eq!(circuit.num_qubits(), 4);
    }
}
