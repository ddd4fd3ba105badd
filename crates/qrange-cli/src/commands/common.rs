//! Shared helpers for CLI commands.

use anyhow::Result;
use console::style;

use qrange_adapter_sim::SimulatorBackend;
use qrange_hal::{BackendFactory, Counts, SimulationConfig};
use qrange_oracle::BitString;

/// Build the simulator backend, seeded when reproducibility is requested.
pub fn make_backend(shots: u32, seed: Option<u64>) -> Result<SimulatorBackend> {
    let mut config = SimulationConfig::new("simulator", shots);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    Ok(SimulatorBackend::from_config(&config)?)
}

/// Print an outcome-frequency table, highlighting outcomes inside the range.
pub fn print_counts(counts: &Counts, lower: u64, upper: u64) {
    let sorted = counts.sorted();
    let total = counts.total_shots() as f64;

    for (bitstring, count) in sorted.iter().take(16) {
        let prob = **count as f64 / total * 100.0;
        let bar_len = (prob / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);

        let in_range = bitstring
            .parse::<BitString>()
            .map(|bits| bits.value() > lower && bits.value() < upper)
            .unwrap_or(false);
        let label = if in_range {
            style(bitstring).green().bold()
        } else {
            style(bitstring).dim()
        };

        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            label,
            count,
            prob,
            style(bar).cyan()
        );
    }

    if sorted.len() > 16 {
        println!("  ... and {} more outcomes", sorted.len() - 16);
    }
}
