//! Quantum gate types.
//!
//! The gate set is deliberately small: it is exactly what range-comparator
//! oracles and the Grover diffuser are built from. Each gate is tagged by
//! kind; control qubits are carried by the [`crate::Instruction`] operand
//! list (controls first, target last).

use serde::{Deserialize, Serialize};

/// Standard gates with known semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Z gate.
    Z,
    /// Phase gate P(θ): multiplies the |1⟩ amplitude by exp(iθ).
    P(f64),
    /// Multi-controlled X with the given number of controls.
    ///
    /// `MCX(0)` is a plain X, `MCX(1)` is CX, `MCX(2)` is Toffoli, and so
    /// on. Operands are the controls in order followed by the target.
    MCX(u32),
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::H => "h",
            StandardGate::X => "x",
            StandardGate::Z => "z",
            StandardGate::P(_) => "p",
            StandardGate::MCX(_) => "mcx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::H | StandardGate::X | StandardGate::Z | StandardGate::P(_) => 1,
            StandardGate::MCX(controls) => controls + 1,
        }
    }
}

/// A gate with associated metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// The kind of gate.
    pub kind: StandardGate,
    /// Optional label for the gate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Gate {
    /// Create a new gate from a standard gate.
    pub fn standard(kind: StandardGate) -> Self {
        Self { kind, label: None }
    }

    /// Add a label to the gate.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the name of this gate.
    pub fn name(&self) -> &str {
        self.kind.name()
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.kind.num_qubits()
    }
}

impl From<StandardGate> for Gate {
    fn from(kind: StandardGate) -> Self {
        Gate::standard(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_arity() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::Z.num_qubits(), 1);
        assert_eq!(StandardGate::MCX(0).num_qubits(), 1);
        assert_eq!(StandardGate::MCX(1).num_qubits(), 2);
        assert_eq!(StandardGate::MCX(3).num_qubits(), 4);
    }

    #[test]
    fn test_gate_names() {
        assert_eq!(StandardGate::H.name(), "h");
        assert_eq!(StandardGate::P(1.5).name(), "p");
        assert_eq!(StandardGate::MCX(2).name(), "mcx");
    }

    #[test]
    fn test_gate_label() {
        let g = Gate::standard(StandardGate::X).with_label("cleanup");
        assert_eq!(g.label, Some("cleanup".to_string()));
        assert_eq!(g.name(), "x");
    }
}
