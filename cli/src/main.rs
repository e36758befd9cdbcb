//! Experiment driver
//!
//! Sweeps the cross product of overturn margin x panel size x review
//! probability, running one full simulation per combination and printing
//! one summary line per run (or a JSON array with `--json`).

use appellate_sim_core::{RunSummary, Simulation, SimulationConfig};
use clap::Parser;

/// Reference sweep values.
const OVERTURN_MARGINS: [f64; 6] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5];
const PANEL_SIZES: [usize; 3] = [1, 3, 5];
const REVIEW_PROBABILITIES: [f64; 1] = [1.0];

#[derive(Parser, Debug)]
#[command(
    name = "appellate-sim",
    about = "Monte Carlo simulator of judicial decision-making under noisy information"
)]
struct Args {
    /// Base RNG seed; each sweep combination derives its own seed from it
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Cases per run
    #[arg(long, default_value_t = 3_000_000)]
    cases: u64,

    /// Size of the decisionmaker pool
    #[arg(long, default_value_t = 100_000)]
    decisionmakers: usize,

    /// Standard deviation of the observation noise channel
    #[arg(long, default_value_t = 0.2)]
    obfuscation_stddev: f64,

    /// Mean of the per-decisionmaker bias-magnitude draw
    #[arg(long, default_value_t = 0.2)]
    bias_mean: f64,

    /// Standard deviation of the per-decisionmaker bias-magnitude draw
    #[arg(long, default_value_t = 0.1)]
    bias_stddev: f64,

    /// Emit a JSON array of run summaries instead of text lines
    #[arg(long)]
    json: bool,
}

fn run_sweep(args: &Args) -> Result<Vec<RunSummary>, Box<dyn std::error::Error>> {
    let mut summaries = Vec::new();
    let mut combination: u64 = 0;

    for overturn_margin in OVERTURN_MARGINS {
        for panel_size in PANEL_SIZES {
            for review_probability in REVIEW_PROBABILITIES {
                let config = SimulationConfig {
                    num_cases: args.cases,
                    num_decisionmakers: args.decisionmakers,
                    panel_size,
                    obfuscation_stddev: args.obfuscation_stddev,
                    bias_magnitude_mean: args.bias_mean,
                    bias_magnitude_stddev: args.bias_stddev,
                    review_probability,
                    overturn_margin,
                    // distinct seed per combination, derived from the base
                    rng_seed: args
                        .seed
                        .wrapping_add(combination.wrapping_mul(0x9E3779B97F4A7C15)),
                };
                combination += 1;

                let summary = Simulation::new(config)?.run()?;
                if !args.json {
                    println!("{}", summary);
                }
                summaries.push(summary);
            }
        }
    }

    Ok(summaries)
}

fn main() {
    let args = Args::parse();
    match run_sweep(&args) {
        Ok(summaries) => {
            if args.json {
                match serde_json::to_string_pretty(&summaries) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("error: failed to serialize summaries: {}", e);
                        std::process::exit(1);
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
