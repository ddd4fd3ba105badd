//! qrange Backend Abstraction Layer
//!
//! A unified interface for executing [`qrange_ir::Circuit`]s on a
//! measurement backend. The oracle builders and the orchestrator never talk
//! to a simulator directly; they hand a finished circuit and a shot count to
//! a [`Backend`] and interpret the returned [`Counts`].
//!
//! # Example: running a circuit
//!
//! ```ignore
//! use qrange_hal::{Backend, SimulationConfig};
//! use qrange_adapter_sim::SimulatorBackend;
//! use qrange_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut circuit = Circuit::with_size("uniform", 3, 3);
//!     circuit.h_all()?.measure_all()?;
//!
//!     let backend = SimulatorBackend::new();
//!     let job_id = backend.submit(&circuit, 1000).await?;
//!     let result = backend.wait(&job_id).await?;
//!
//!     if let Some((bitstring, count)) = result.counts.most_frequent() {
//!         println!("most frequent: {bitstring} ({count} times)");
//!     }
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod job;
pub mod result;

pub use backend::{Backend, BackendFactory, SimulationConfig};
pub use capability::Capabilities;
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
pub use result::{Counts, ExecutionResult};
