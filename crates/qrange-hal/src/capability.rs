//! Backend capability description.

use serde::{Deserialize, Serialize};

/// Capabilities of a backend.
///
/// Cached at backend construction time; [`crate::Backend::capabilities`]
/// returns a reference without performing I/O.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Maximum number of qubits the backend can execute.
    pub num_qubits: u32,
    /// Names of the gates the backend natively supports.
    pub gate_set: Vec<String>,
    /// Whether the backend is a simulator.
    pub is_simulator: bool,
}

impl Capabilities {
    /// Capabilities of a local statevector simulator.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            gate_set: ["h", "x", "z", "p", "mcx"].map(String::from).to_vec(),
            is_simulator: true,
        }
    }

    /// Check whether a gate name is in the supported set.
    pub fn supports_gate(&self, name: &str) -> bool {
        self.gate_set.iter().any(|g| g == name)
    }
}
