//! Replays a savings scenario file and prints the JSON report.
//!
//! Logging is controlled through `RUST_LOG` (default `info`).

use clap::Parser;
use savings_sim::{Scenario, SimRunner};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "savings-sim", about = "Replay savings ledger scenarios")]
struct Args {
    /// Scenario JSON files to run, in order
    #[arg(required = true)]
    scenarios: Vec<PathBuf>,

    /// Print only the summary of each run
    #[arg(long)]
    summary_only: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}

/// Returns whether every scenario passed
fn run(args: Args) -> Result<bool, Box<dyn std::error::Error>> {
    let runner = SimRunner::new();
    let mut all_passed = true;

    for path in &args.scenarios {
        let json = std::fs::read_to_string(path)?;
        let scenario = Scenario::from_json(&json)?;
        let result = runner.run_scenario(&scenario)?;
        all_passed &= result.summary.passed;

        let report = if args.summary_only {
            serde_json::to_string_pretty(&result.summary)?
        } else {
            serde_json::to_string_pretty(&result)?
        };
        println!("{report}");
    }

    Ok(all_passed)
}
