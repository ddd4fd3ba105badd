//! Multi-controlled phase-flip primitive.

use qrange_ir::{Circuit, QubitId, ascending};

use crate::error::{OracleResult, RangeOracleError};

/// Build the block that flips the phase of the all-ones basis state.
///
/// The multi-controlled Z is realized as a multi-controlled X conjugated by
/// Hadamards on the target: qubits `0..width-1` control, qubit `width-1` is
/// the target. At `width == 1` the control list is empty and the block
/// degenerates to H·X·H, a plain Z.
pub fn phase_flip_block(width: u32) -> OracleResult<Circuit> {
    if width == 0 {
        return Err(RangeOracleError::ZeroWidth);
    }
    let target = QubitId(width - 1);
    let controls = ascending(width - 1);

    let mut circuit = Circuit::with_size(format!("mcz_{width}"), width, 0);
    circuit.h(target)?.mcx(controls, target)?.h(target)?;
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrange_ir::StandardGate;

    #[test]
    fn test_block_structure() {
        let block = phase_flip_block(3).unwrap();
        assert_eq!(block.num_qubits(), 3);
        assert_eq!(block.len(), 3);
        assert_eq!(block.count_gate(&StandardGate::H), 2);
        assert_eq!(block.count_gate(&StandardGate::MCX(2)), 1);

        // Controls first, target last.
        assert_eq!(
            block.instructions()[1].qubits,
            vec![QubitId(0), QubitId(1), QubitId(2)]
        );
    }

    #[test]
    fn test_single_qubit_degenerates_to_z() {
        let block = phase_flip_block(1).unwrap();
        assert_eq!(block.count_gate(&StandardGate::MCX(0)), 1);
        assert_eq!(block.instructions()[1].qubits, vec![QubitId(0)]);
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(matches!(
            phase_flip_block(0),
            Err(RangeOracleError::ZeroWidth)
        ));
    }
}
