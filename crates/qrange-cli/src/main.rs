//! qrange Command-Line Interface
//!
//! Samples integers from a Grover-amplified distribution biased toward an
//! open range, and inspects the circuits and plans behind the sampling.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{histogram, plan, sample};

/// qrange - biased integer sampling through amplitude amplification
#[derive(Parser)]
#[command(name = "qrange")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw one integer from the amplified distribution
    Sample {
        /// Lower bound of the range (exclusive)
        #[arg(short, long)]
        lower: u64,

        /// Upper bound of the range (exclusive)
        #[arg(short, long)]
        upper: u64,

        /// Register width in qubits
        #[arg(short, long, default_value = "4")]
        width: u32,

        /// RNG seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run many shots and print the outcome-frequency table
    Histogram {
        /// Lower bound of the range (exclusive)
        #[arg(short, long)]
        lower: u64,

        /// Upper bound of the range (exclusive)
        #[arg(short, long)]
        upper: u64,

        /// Register width in qubits
        #[arg(short, long, default_value = "4")]
        width: u32,

        /// Number of measurement shots
        #[arg(short, long, default_value = "200")]
        shots: u32,

        /// RNG seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the amplification plan and circuit size without running
    Plan {
        /// Lower bound of the range (exclusive)
        #[arg(short, long)]
        lower: u64,

        /// Upper bound of the range (exclusive)
        #[arg(short, long)]
        upper: u64,

        /// Register width in qubits
        #[arg(short, long, default_value = "4")]
        width: u32,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Sample {
            lower,
            upper,
            width,
            seed,
        } => sample::execute(lower, upper, width, seed).await,

        Commands::Histogram {
            lower,
            upper,
            width,
            shots,
            seed,
        } => histogram::execute(lower, upper, width, shots, seed).await,

        Commands::Plan {
            lower,
            upper,
            width,
            format,
        } => plan::execute(lower, upper, width, &format),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
