//! Sample command implementation.

use anyhow::Result;
use console::style;

use qrange_oracle::RangeSampler;

use super::common::make_backend;

/// Execute the sample command.
pub async fn execute(lower: u64, upper: u64, width: u32, seed: Option<u64>) -> Result<()> {
    println!(
        "{} Sampling one integer biased toward ({}, {}) over {} qubits",
        style("→").cyan().bold(),
        style(lower).yellow(),
        style(upper).yellow(),
        width
    );

    let sampler = RangeSampler::new(lower, upper, width)?;
    let backend = make_backend(1, seed)?;
    let value = sampler.sample(&backend).await?;

    println!("\n{} {}", style("✓").green().bold(), style(value).green());
    Ok(())
}
