//! Local statevector simulator backend for qrange.
//!
//! Implements the [`qrange_hal::Backend`] trait with a dense statevector
//! simulation. Suitable for the small registers range oracles are built
//! for; memory doubles per qubit.
//!
//! The [`evolve`] function is also exported on its own so tests can
//! inspect final amplitudes (in particular the ±1 signs an oracle leaves
//! behind) without going through the sampling layer.

pub mod simulator;
pub mod statevector;

pub use simulator::SimulatorBackend;
pub use statevector::{Statevector, evolve};
