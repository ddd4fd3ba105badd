//! Program assembly and execution orchestration.
//!
//! [`assemble`] wires oracle, diffuser, and plan into one measurable
//! circuit; [`RangeSampler`] hands that circuit to a backend and interprets
//! the returned counts. The backend call is the single suspension point of
//! the pipeline and the only source of nondeterminism.

use tracing::{debug, info};

use qrange_hal::{Backend, Counts};
use qrange_ir::{Circuit, ascending};

use crate::codec::BitString;
use crate::diffuser::diffuser;
use crate::error::{OracleResult, ProgramError, RangeOracleError};
use crate::planner::{AmplificationPlan, IterationPlanner, LinearPlanner, plan_with};
use crate::range::range_oracle;

/// An assembled amplification program: the runnable circuit together with
/// the plan that shaped it.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeProgram {
    circuit: Circuit,
    plan: AmplificationPlan,
}

impl RangeProgram {
    /// The runnable circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// The plan the circuit was assembled from.
    pub fn plan(&self) -> &AmplificationPlan {
        &self.plan
    }

    /// Consume the program, keeping only the circuit.
    pub fn into_circuit(self) -> Circuit {
        self.circuit
    }
}

/// Assemble the full amplification program with the default planner.
pub fn assemble(lower: u64, upper: u64, width: u32) -> OracleResult<RangeProgram> {
    assemble_with(&LinearPlanner, lower, upper, width)
}

/// Assemble the full amplification program with a caller-supplied planner.
///
/// Layout: Hadamard on every qubit for the uniform superposition, then
/// `iterations` repetitions of range oracle followed by diffuser, then a
/// full-register measurement.
pub fn assemble_with(
    planner: &dyn IterationPlanner,
    lower: u64,
    upper: u64,
    width: u32,
) -> OracleResult<RangeProgram> {
    let plan = plan_with(planner, lower, upper, width)?;
    let oracle = range_oracle(lower, upper, width)?;
    let diffuser = diffuser(width)?;

    debug!(
        lower,
        upper,
        width,
        iterations = plan.iterations,
        "assembling amplification program"
    );

    let mut circuit = Circuit::with_size(format!("range_sampler_{lower}_{upper}"), width, width);
    circuit.h_all()?;
    let map = ascending(width);
    for _ in 0..plan.iterations {
        circuit.inline(&oracle, &map)?;
        circuit.inline(&diffuser, &map)?;
    }
    circuit.measure_all()?;

    Ok(RangeProgram { circuit, plan })
}

/// Samples integers biased toward an open range.
///
/// Construction validates the bounds once; each run re-assembles the (pure,
/// deterministic) circuit and submits it to the backend.
#[derive(Debug, Clone)]
pub struct RangeSampler {
    lower: u64,
    upper: u64,
    width: u32,
}

impl RangeSampler {
    /// Create a sampler for the open interval `(lower, upper)` over a
    /// `width`-qubit register.
    pub fn new(lower: u64, upper: u64, width: u32) -> OracleResult<Self> {
        crate::range::check_bounds(lower, upper, width)?;
        Ok(Self {
            lower,
            upper,
            width,
        })
    }

    /// The assembled program for this sampler's range.
    pub fn assemble(&self) -> OracleResult<RangeProgram> {
        assemble(self.lower, self.upper, self.width)
    }

    /// Run the program and return the full outcome-frequency table.
    pub async fn histogram(
        &self,
        backend: &dyn Backend,
        shots: u32,
    ) -> Result<Counts, ProgramError> {
        let program = self.assemble()?;
        let job_id = backend.submit(program.circuit(), shots).await?;
        let result = backend.wait(&job_id).await?;
        info!(
            lower = self.lower,
            upper = self.upper,
            shots,
            outcomes = result.counts.len(),
            "amplification run completed"
        );
        Ok(result.counts)
    }

    /// Run the program with a single shot and decode the outcome back to an
    /// integer.
    pub async fn sample(&self, backend: &dyn Backend) -> Result<u64, ProgramError> {
        let counts = self.histogram(backend, 1).await?;
        let (outcome, _) = counts.most_frequent().ok_or(ProgramError::NoOutcome)?;
        let bits: BitString = outcome.parse().map_err(RangeOracleError::from)?;
        Ok(bits.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrange_ir::StandardGate;

    #[test]
    fn test_assemble_layout() {
        let program = assemble(2, 6, 4).unwrap();
        assert_eq!(program.plan().iterations, 5);

        let circuit = program.circuit();
        assert_eq!(circuit.num_qubits(), 4);
        assert_eq!(circuit.num_clbits(), 4);

        // Opens with the uniform-superposition layer.
        for inst in &circuit.instructions()[..4] {
            assert_eq!(inst.name(), "h");
        }
        // Ends with a full-register measurement.
        assert!(circuit.instructions().last().unwrap().is_measure());
        // Two full-width blocks per round: one inside greater_than(2)'s
        // comparator, one in the diffuser.
        assert_eq!(circuit.count_gate(&StandardGate::MCX(3)), 10);
    }

    #[test]
    fn test_assemble_is_deterministic() {
        assert_eq!(assemble(2, 6, 4).unwrap(), assemble(2, 6, 4).unwrap());
    }

    #[test]
    fn test_sampler_validates_on_construction() {
        assert!(RangeSampler::new(2, 6, 4).is_ok());
        assert!(matches!(
            RangeSampler::new(6, 2, 4),
            Err(RangeOracleError::BoundsOutOfOrder { .. })
        ));
    }
}
