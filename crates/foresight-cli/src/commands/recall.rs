//! Recall command
//!
//! Usage: foresight recall <DESCRIPTION>

use crate::commands::print_json;
use crate::Session;
use clap::Args;
use foresight_core_types::RequestContext;
use foresight_engine::commands::guidance::recall;

#[derive(Debug, Args)]
pub struct RecallArgs {
    /// Free-text description of the current scenario
    pub description: String,
}

/// Execute recall command
pub fn execute(session: &Session, args: RecallArgs) -> Result<(), Box<dyn std::error::Error>> {
    let bank = session.config.memory_bank();
    let hits = recall(&RequestContext::new(), &bank, &args.description);

    if session.json {
        return print_json(&hits);
    }

    if hits.is_empty() {
        println!("No relevant past decisions.");
    }
    for entry in &hits {
        println!("Scenario: {}, Strategy: {}", entry.scenario, entry.strategy);
    }

    Ok(())
}
