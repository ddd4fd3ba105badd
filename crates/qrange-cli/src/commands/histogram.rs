//! Histogram command implementation.

use anyhow::Result;
use console::style;

use qrange_oracle::RangeSampler;

use super::common::{make_backend, print_counts};

/// Execute the histogram command.
pub async fn execute(
    lower: u64,
    upper: u64,
    width: u32,
    shots: u32,
    seed: Option<u64>,
) -> Result<()> {
    println!(
        "{} Amplifying ({}, {}) over {} qubits ({} shots)",
        style("→").cyan().bold(),
        style(lower).yellow(),
        style(upper).yellow(),
        width,
        shots
    );

    let sampler = RangeSampler::new(lower, upper, width)?;
    let program = sampler.assemble()?;
    println!(
        "  Assembled: {} rounds, {} instructions",
        program.plan().iterations,
        program.circuit().len()
    );

    let backend = make_backend(shots, seed)?;
    let counts = sampler.histogram(&backend, shots).await?;

    println!(
        "\n{} Results ({} shots):",
        style("✓").green().bold(),
        counts.total_shots()
    );
    print_counts(&counts, lower, upper);
    Ok(())
}
