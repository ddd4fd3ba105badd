//! Plan command implementation.

use anyhow::Result;
use console::style;

use qrange_oracle::{assemble, plan};

/// Execute the plan command.
pub fn execute(lower: u64, upper: u64, width: u32, format: &str) -> Result<()> {
    let plan = plan(lower, upper, width)?;
    let program = assemble(lower, upper, width)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        "table" => {
            println!(
                "{} Plan for ({}, {}) over {} qubits",
                style("→").cyan().bold(),
                style(lower).yellow(),
                style(upper).yellow(),
                width
            );
            println!("  Search space:  {} states", 2f64.powi(width as i32));
            println!("  Marked states: {}", upper.saturating_sub(lower + 1));
            println!(
                "  Rounds:        {}",
                style(plan.iterations).green().bold()
            );
            println!("  Instructions:  {}", program.circuit().len());
            println!("  Gates:         {}", program.circuit().gate_count());
        }
        other => {
            anyhow::bail!("Unknown format: '{other}'. Available: table, json");
        }
    }
    Ok(())
}
