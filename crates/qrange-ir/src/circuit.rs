//! High-level circuit builder API.
//!
//! A [`Circuit`] is an ordered sequence of instructions over a declared
//! number of qubits and classical bits. Construction goes through the
//! fluent gate methods; once a builder function returns the circuit, the
//! value is treated as immutable and further circuits are derived by
//! [`Circuit::inline`] composition rather than by patching.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, QubitId};

/// A quantum circuit as a flat, ordered instruction list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Declared number of qubits.
    num_qubits: u32,
    /// Declared number of classical bits.
    num_clbits: u32,
    /// The ordered instruction sequence.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            num_clbits,
            instructions: vec![],
        }
    }

    // =========================================================================
    // Gate methods
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::H, qubit))
    }

    /// Apply Hadamard to every qubit in the register.
    pub fn h_all(&mut self) -> IrResult<&mut Self> {
        for q in 0..self.num_qubits {
            self.h(QubitId(q))?;
        }
        Ok(self)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::X, qubit))
    }

    /// Apply Pauli-X to every qubit in the register.
    pub fn x_all(&mut self) -> IrResult<&mut Self> {
        for q in 0..self.num_qubits {
            self.x(QubitId(q))?;
        }
        Ok(self)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Z, qubit))
    }

    /// Apply phase gate P(θ).
    pub fn p(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::P(theta), qubit))
    }

    /// Apply a multi-controlled X (controls first, target last).
    ///
    /// An empty control list is a plain X on the target.
    pub fn mcx(
        &mut self,
        controls: impl IntoIterator<Item = QubitId>,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::mcx(controls, target))
    }

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.apply(Instruction::measure(qubit, clbit))
    }

    /// Measure every qubit to the corresponding classical bit.
    ///
    /// Requires the circuit to declare at least as many classical bits as
    /// qubits.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        if self.num_clbits < self.num_qubits {
            return Err(IrError::InvalidInstruction(format!(
                "measure_all: circuit has {} qubits but only {} classical bits",
                self.num_qubits, self.num_clbits,
            )));
        }
        let qubits: Vec<_> = (0..self.num_qubits).map(QubitId).collect();
        let clbits: Vec<_> = (0..self.num_qubits).map(ClbitId).collect();
        self.apply(Instruction::measure_all(qubits, clbits)?)
    }

    /// Apply a barrier to all qubits.
    pub fn barrier_all(&mut self) -> IrResult<&mut Self> {
        let qubits: Vec<_> = (0..self.num_qubits).map(QubitId).collect();
        self.apply(Instruction::barrier(qubits))
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Inline another circuit into this one.
    ///
    /// `mapping[i]` names the qubit of `self` that qubit `i` of `sub` is
    /// remapped onto. The mapping is an explicit translation table, so
    /// callers can address a sub-range in ascending or descending order and
    /// that order is preserved exactly.
    ///
    /// Sub-circuits containing measurements cannot be inlined: classical
    /// read-out belongs to the outer program.
    pub fn inline(&mut self, sub: &Circuit, mapping: &[QubitId]) -> IrResult<&mut Self> {
        if mapping.len() != sub.num_qubits as usize {
            return Err(IrError::InvalidComposition(format!(
                "mapping covers {} qubits but sub-circuit '{}' has {}",
                mapping.len(),
                sub.name,
                sub.num_qubits,
            )));
        }
        for target in mapping {
            if target.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit: *target,
                    gate_name: Some(format!("inline {}", sub.name)),
                });
            }
        }
        let mut seen = vec![false; self.num_qubits as usize];
        for target in mapping {
            if seen[target.0 as usize] {
                return Err(IrError::DuplicateQubit {
                    qubit: *target,
                    gate_name: Some(format!("inline {}", sub.name)),
                });
            }
            seen[target.0 as usize] = true;
        }
        if sub.instructions.iter().any(Instruction::is_measure) {
            return Err(IrError::InvalidComposition(format!(
                "sub-circuit '{}' contains measurements",
                sub.name,
            )));
        }

        for inst in &sub.instructions {
            let mut remapped = inst.clone();
            remapped.qubits = inst.qubits.iter().map(|q| mapping[q.0 as usize]).collect();
            self.apply(remapped)?;
        }
        Ok(self)
    }

    /// Append a validated instruction.
    fn apply(&mut self, inst: Instruction) -> IrResult<&mut Self> {
        for qubit in &inst.qubits {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit: *qubit,
                    gate_name: Some(inst.name().to_string()),
                });
            }
        }
        for clbit in &inst.clbits {
            if clbit.0 >= self.num_clbits {
                return Err(IrError::ClbitNotFound { clbit: *clbit });
            }
        }
        let mut seen = vec![false; self.num_qubits as usize];
        for qubit in &inst.qubits {
            if seen[qubit.0 as usize] {
                return Err(IrError::DuplicateQubit {
                    qubit: *qubit,
                    gate_name: Some(inst.name().to_string()),
                });
            }
            seen[qubit.0 as usize] = true;
        }
        if let InstructionKind::Gate(gate) = &inst.kind {
            let expected = gate.num_qubits();
            let got = u32::try_from(inst.qubits.len()).unwrap_or(u32::MAX);
            if expected != got {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate.name().to_string(),
                    expected,
                    got,
                });
            }
        }
        self.instructions.push(inst);
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits as usize
    }

    /// Get the ordered instruction sequence.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Get the total number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` if the circuit contains no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Get the number of gate instructions (excluding measure and barrier).
    pub fn gate_count(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_gate()).count()
    }

    /// Count occurrences of a specific gate.
    pub fn count_gate(&self, gate: &StandardGate) -> usize {
        self.instructions
            .iter()
            .filter_map(Instruction::as_gate)
            .filter(|g| &g.kind == gate)
            .count()
    }
}

/// Identity mapping `[q0, q1, ..., q(n-1)]` for ascending inlines.
pub fn ascending(num_qubits: u32) -> Vec<QubitId> {
    (0..num_qubits).map(QubitId).collect()
}

/// Reversed mapping `[q(n-1), ..., q1, q0]` for descending inlines.
pub fn descending(num_qubits: u32) -> Vec<QubitId> {
    (0..num_qubits).rev().map(QubitId).collect()
}
