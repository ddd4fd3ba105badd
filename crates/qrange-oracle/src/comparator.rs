//! Comparator oracles: "less than N" and "greater than N".
//!
//! `less_than` is built directly by a most-significant-first bit scan;
//! `greater_than` is derived from it through the identity
//! `greater_than(n) = less_than(n + 1) ∘ global_phase`.

use tracing::debug;

use qrange_ir::{Circuit, QubitId, ascending};

use crate::codec::{Number, max_value};
use crate::error::{OracleResult, RangeOracleError};
use crate::mcz::phase_flip_block;

/// A four-gate sequence on one qubit whose net effect is to multiply the
/// whole state by −1.
///
/// X·Z·X·Z = −I on a single qubit, value-independent. Used to fix the sign
/// convention when a less-than circuit stands in for its complement.
pub fn global_phase() -> OracleResult<Circuit> {
    let mut circuit = Circuit::with_size("global_phase", 1, 0);
    let q = QubitId(0);
    circuit.z(q)?.x(q)?.z(q)?.x(q)?;
    Ok(circuit)
}

/// Build the oracle marking every basis state strictly less than `number`.
///
/// The returned circuit multiplies the amplitude of states `< number` by −1
/// and leaves every other state untouched; its net effect is exactly a
/// diagonal of ±1, never a permutation.
///
/// `less_than(0)` marks the empty set and returns a circuit with no gates.
pub fn less_than(number: impl Into<Number>, width: u32) -> OracleResult<Circuit> {
    if width == 0 {
        return Err(RangeOracleError::ZeroWidth);
    }
    let number = number.into();
    let value = number.value();
    if value > max_value(width) {
        return Err(RangeOracleError::OutOfRange { value, width });
    }
    let bits = number.resolve(width)?;

    let mut circuit = Circuit::with_size(format!("lt_{value}"), width, 0);
    let prefix = bits.active_prefix();
    if prefix.is_empty() {
        // No state is below zero.
        return Ok(circuit);
    }
    debug!(value, width, prefix_len = prefix.len(), "building less-than oracle");

    // The scan walks the target number's bits from the most significant
    // down. Each '1' bit contributes one marked sub-space: the states that
    // match the prefix above it and carry '0' at its position are all below
    // the target, so a phase-flip block sized to the prefix marks them. The
    // X gates conjugate qubits so the all-ones block can stand in for the
    // specific prefix pattern.
    let msb = QubitId(width - 1);
    if prefix[0] {
        circuit.x(msb)?.z(msb)?.x(msb)?;
    } else {
        circuit.x(msb)?;
    }

    for (position, &bit) in prefix.iter().enumerate().skip(1) {
        let position = position as u32;
        let qubit = QubitId(width - 1 - position);
        if bit {
            let block = phase_flip_block(position + 1)?;
            let span: Vec<QubitId> = (width - 1 - position..=width - 1)
                .rev()
                .map(QubitId)
                .collect();
            circuit.x(qubit)?;
            circuit.inline(&block, &span)?;
            circuit.x(qubit)?;
        } else {
            circuit.x(qubit)?;
        }
    }

    // Undo the conjugating X on every '0' prefix position.
    for (position, &bit) in prefix.iter().enumerate() {
        if !bit {
            circuit.x(QubitId(width - 1 - position as u32))?;
        }
    }

    Ok(circuit)
}

/// Build the oracle marking every basis state strictly greater than
/// `number`.
///
/// `greater_than` of the maximum representable value marks the empty set
/// and returns a circuit with no gates; the bound never wraps around.
pub fn greater_than(number: impl Into<Number>, width: u32) -> OracleResult<Circuit> {
    if width == 0 {
        return Err(RangeOracleError::ZeroWidth);
    }
    let number = number.into();
    let value = number.value();
    let max = max_value(width);
    if value > max {
        return Err(RangeOracleError::OutOfRange { value, width });
    }

    let mut circuit = Circuit::with_size(format!("gt_{value}"), width, 0);
    if value == max {
        // Nothing exceeds the top of the register.
        return Ok(circuit);
    }

    circuit.inline(&less_than(value + 1, width)?, &ascending(width))?;
    circuit.inline(&global_phase()?, &[QubitId(0)])?;
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrange_ir::StandardGate;

    #[test]
    fn test_global_phase_structure() {
        let circuit = global_phase().unwrap();
        assert_eq!(circuit.num_qubits(), 1);
        assert_eq!(circuit.count_gate(&StandardGate::Z), 2);
        assert_eq!(circuit.count_gate(&StandardGate::X), 2);
    }

    #[test]
    fn test_less_than_zero_is_empty() {
        let circuit = less_than(0u64, 4).unwrap();
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_less_than_one_marks_only_zero_state() {
        // 1 in 4 bits is "0001": one X on the top qubit, then a full-width
        // block per the '1' at the lowest position, then cleanup.
        let circuit = less_than(1u64, 4).unwrap();
        assert!(!circuit.is_empty());
        assert_eq!(circuit.count_gate(&StandardGate::MCX(3)), 1);
    }

    #[test]
    fn test_less_than_msb_one_starts_with_xzx() {
        // 8 in 4 bits has active prefix "1".
        let circuit = less_than(8u64, 4).unwrap();
        assert_eq!(circuit.len(), 3);
        assert_eq!(circuit.instructions()[0].name(), "x");
        assert_eq!(circuit.instructions()[1].name(), "z");
        assert_eq!(circuit.instructions()[2].name(), "x");
    }

    #[test]
    fn test_less_than_out_of_range() {
        assert!(matches!(
            less_than(16u64, 4),
            Err(RangeOracleError::OutOfRange {
                value: 16,
                width: 4
            })
        ));
    }

    #[test]
    fn test_greater_than_max_is_empty() {
        let circuit = greater_than(15u64, 4).unwrap();
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_greater_than_composes_less_than() {
        let gt = greater_than(6u64, 4).unwrap();
        let lt = less_than(7u64, 4).unwrap();
        // gt(6) is lt(7) plus the four-gate global phase.
        assert_eq!(gt.len(), lt.len() + 4);
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(matches!(less_than(0u64, 0), Err(RangeOracleError::ZeroWidth)));
        assert!(matches!(
            greater_than(0u64, 0),
            Err(RangeOracleError::ZeroWidth)
        ));
    }
}
