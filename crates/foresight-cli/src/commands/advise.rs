//! Advise command
//!
//! Usage: foresight advise <TOPIC> [--list]

use crate::commands::print_json;
use crate::Session;
use clap::Args;
use foresight_core::ops::advisor;
use foresight_core_types::RequestContext;
use foresight_engine::commands::guidance::advise;

#[derive(Debug, Args)]
pub struct AdviseArgs {
    /// Business topic, e.g. "growth" or "customer loyalty"
    #[arg(required_unless_present = "list")]
    pub topic: Option<String>,

    /// List the known topics instead
    #[arg(long)]
    pub list: bool,
}

/// Execute advise command
pub fn execute(session: &Session, args: AdviseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let topic = match (args.list, args.topic) {
        (false, Some(topic)) => topic,
        _ => {
            let topics: Vec<&str> = advisor::topics().collect();
            if session.json {
                return print_json(&topics);
            }
            for topic in topics {
                println!("{}", topic);
            }
            return Ok(());
        }
    };

    let advice = advise(&RequestContext::new(), &topic);

    if session.json {
        return print_json(&serde_json::json!({ "topic": topic, "advice": advice }));
    }
    println!("User Query: {}", topic);
    println!("Advisor: {}", advice);

    Ok(())
}
