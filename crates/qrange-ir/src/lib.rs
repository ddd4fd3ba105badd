//! qrange Circuit Intermediate Representation
//!
//! Core data structures for describing the quantum circuits that the range
//! oracle builders synthesize. A [`Circuit`] is a flat, ordered instruction
//! sequence over a declared register width — there is no rewriting or
//! optimization layer, so no graph representation is needed. Composition
//! happens through [`Circuit::inline`], which appends a sub-circuit with an
//! explicit qubit-index translation table (ascending or descending).
//!
//! # Example: marking the all-ones state of two qubits
//!
//! ```rust
//! use qrange_ir::{Circuit, QubitId};
//!
//! let mut block = Circuit::with_size("mcz", 2, 0);
//! block.h(QubitId(1)).unwrap();
//! block.mcx([QubitId(0)], QubitId(1)).unwrap();
//! block.h(QubitId(1)).unwrap();
//!
//! let mut outer = Circuit::with_size("outer", 4, 0);
//! // Address qubits 3 and 2 in descending order.
//! outer.inline(&block, &[QubitId(3), QubitId(2)]).unwrap();
//! assert_eq!(outer.gate_count(), 3);
//! ```
//!
//! # Supported gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X`, `Z` | 1 | Pauli gates |
//! | `P(θ)` | 1 | Phase gate |
//! | `MCX(k)` | k+1 | Multi-controlled X (k controls) |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::{Circuit, ascending, descending};
pub use error::{IrError, IrResult};
pub use gate::{Gate, StandardGate};
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
