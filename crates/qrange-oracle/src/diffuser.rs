//! Grover diffuser (inversion about the mean).

use qrange_ir::{Circuit, descending};

use crate::error::{OracleResult, RangeOracleError};
use crate::mcz::phase_flip_block;

/// Build the diffuser for a `width`-qubit register.
///
/// Hadamard and X on every qubit, a full-width phase-flip block addressed
/// in descending qubit order, then the X and Hadamard layers again. The
/// operator inverts every amplitude about the mean and is range-independent.
pub fn diffuser(width: u32) -> OracleResult<Circuit> {
    if width == 0 {
        return Err(RangeOracleError::ZeroWidth);
    }
    let mut circuit = Circuit::with_size(format!("diffuser_{width}"), width, 0);
    circuit.h_all()?.x_all()?;
    circuit.inline(&phase_flip_block(width)?, &descending(width))?;
    circuit.x_all()?.h_all()?;
    Ok(circuit)
}
