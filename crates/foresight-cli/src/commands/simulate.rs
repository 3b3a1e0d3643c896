//! Simulate command
//!
//! Usage: foresight simulate [--count <N>] [--seed <SEED>] [--top <N>]

use crate::commands::print_json;
use crate::Session;
use clap::Args;
use foresight_core_types::RequestContext;
use foresight_engine::commands::simulate::{simulate, SimulateRequest};

#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Number of scenarios (default: simulation.default_count)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// RNG seed for a reproducible run
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Only show the N most likely scenarios
    #[arg(short, long)]
    pub top: Option<usize>,
}

/// Execute simulate command
pub fn execute(session: &Session, args: SimulateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = RequestContext::new();
    let request = SimulateRequest {
        count: args.count,
        seed: args.seed,
    };

    let outcome = simulate(&ctx, &session.config.simulation, &request)?;
    let shown = match args.top {
        Some(n) => outcome.scenarios.top(n),
        None => outcome.scenarios.as_slice(),
    };

    if session.json {
        return print_json(&serde_json::json!({
            "seed": outcome.seed,
            "scenarios": shown,
        }));
    }

    println!("Market simulation scenarios (seed {}):", outcome.seed);
    for (i, s) in shown.iter().enumerate() {
        println!(
            "Scenario {}: Probability {:.2}, Risk {:.2}, Opportunity {:.2}, Action: {}",
            i + 1,
            s.probability(),
            s.risk(),
            s.opportunity(),
            s.recommended_action()
        );
    }

    Ok(())
}
