//! Backend trait and simulation configuration.
//!
//! The [`Backend`] trait defines the lifecycle for executing a circuit:
//!
//! ```text
//!   capabilities() ──→ submit() ──→ status() ──→ result()
//!    (sync, &ref)       (async)      (async)      (async)
//! ```
//!
//! - **Async-native**: all I/O methods are async; the orchestrator's call
//!   into a backend is the single suspension point of the pipeline.
//! - **Thread-safe**: `Send + Sync` bound enables shared ownership.
//! - **Infallible introspection**: `capabilities()` is synchronous and
//!   cached at construction time.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use qrange_ir::Circuit;

use crate::capability::Capabilities;
use crate::error::{HalError, HalResult};
use crate::job::{JobId, JobStatus};
use crate::result::ExecutionResult;

/// Configuration for one simulation run.
///
/// This value travels explicitly into the orchestrator call that needs it;
/// there is no process-wide backend handle and no global random seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Identity of the backend to run on.
    pub backend: String,
    /// Number of measurement shots to request.
    pub shots: u32,
    /// Optional RNG seed for reproducible sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Create a configuration for the named backend.
    pub fn new(backend: impl Into<String>, shots: u32) -> Self {
        Self {
            backend: backend.into(),
            shots,
            seed: None,
        }
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Trait for circuit-execution backends.
///
/// # Contract
///
/// - `capabilities()` MUST be synchronous and infallible; capabilities are
///   cached at construction time.
/// - `submit()` MUST validate the circuit (size, gate set) and reject it
///   with a descriptive [`HalError`] before queueing anything.
/// - `result()` MUST only be called when status is `Completed`; `wait()`
///   has a provided polling implementation.
/// - Counts returned through [`ExecutionResult`] MUST sum to the requested
///   shot count.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Get the capabilities of this backend.
    fn capabilities(&self) -> &Capabilities;

    /// Submit a circuit for execution.
    ///
    /// Returns a job ID that can be used to check status and retrieve
    /// results.
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId>;

    /// Get the status of a job.
    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus>;

    /// Get the result of a completed job.
    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult>;

    /// Cancel a queued or running job.
    async fn cancel(&self, job_id: &JobId) -> HalResult<()>;

    /// Wait for a job to complete and return its result.
    ///
    /// Default implementation polls every 100ms for up to 5 minutes. Any
    /// stricter timeout policy belongs to the caller, not the core.
    async fn wait(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        use tokio::time::sleep;

        let poll_interval = Duration::from_millis(100);
        let max_polls = 3000;

        for _ in 0..max_polls {
            match self.status(job_id).await? {
                JobStatus::Completed => return self.result(job_id).await,
                JobStatus::Failed(msg) => return Err(HalError::JobFailed(msg)),
                JobStatus::Cancelled => return Err(HalError::JobCancelled),
                JobStatus::Queued | JobStatus::Running => {
                    sleep(poll_interval).await;
                }
            }
        }

        Err(HalError::Timeout(job_id.0.clone()))
    }
}

/// Trait for creating backends from configuration.
pub trait BackendFactory: Backend + Sized {
    /// Create a backend from a simulation configuration.
    fn from_config(config: &SimulationConfig) -> HalResult<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_config() {
        let config = SimulationConfig::new("simulator", 200).with_seed(42);
        assert_eq!(config.backend, "simulator");
        assert_eq!(config.shots, 200);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_simulation_config_serde_omits_empty_seed() {
        let config = SimulationConfig::new("simulator", 1);
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("seed"));
    }
}
