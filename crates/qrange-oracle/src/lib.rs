//! Range-membership oracle synthesis and Grover amplitude amplification.
//!
//! Builds circuits that flip the phase of every computational-basis state
//! whose integer value lies strictly inside an open interval, then drives
//! amplitude amplification to bias a sampler toward that interval.
//!
//! The construction stack, leaves first:
//!
//! - [`codec`] — integer ↔ fixed-width bit-string conversion.
//! - [`mcz`] — the multi-controlled phase-flip primitive.
//! - [`comparator`] — "less than" and "greater than" oracles.
//! - [`range`] — the composed range oracle.
//! - [`diffuser`] — inversion about the mean.
//! - [`planner`] — amplification round count heuristic.
//! - [`program`] — assembly and backend orchestration.
//!
//! # Example
//!
//! ```ignore
//! use qrange_adapter_sim::SimulatorBackend;
//! use qrange_oracle::RangeSampler;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let sampler = RangeSampler::new(2, 6, 4)?;
//!     let backend = SimulatorBackend::new();
//!     // Heavily biased toward 3, 4, and 5.
//!     let value = sampler.sample(&backend).await?;
//!     println!("{value}");
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod comparator;
pub mod diffuser;
pub mod error;
pub mod mcz;
pub mod planner;
pub mod program;
pub mod range;

pub use codec::{BitString, Number, encode};
pub use comparator::{global_phase, greater_than, less_than};
pub use diffuser::diffuser;
pub use error::{EncodingError, OracleResult, ProgramError, RangeOracleError};
pub use mcz::phase_flip_block;
pub use planner::{AmplificationPlan, IterationPlanner, LinearPlanner, plan, plan_with};
pub use program::{RangeProgram, RangeSampler, assemble, assemble_with};
pub use range::range_oracle;
