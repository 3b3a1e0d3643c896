//! Lead command
//!
//! Usage: foresight lead [<STYLE>] [--list]

use crate::commands::print_json;
use crate::Session;
use clap::Args;
use foresight_core::ops::leadership;
use foresight_core_types::RequestContext;
use foresight_engine::commands::guidance::lead;

#[derive(Debug, Args)]
pub struct LeadArgs {
    /// Leadership style name
    #[arg(default_value = leadership::DEFAULT_STYLE)]
    pub style: String,

    /// List the known styles instead
    #[arg(long)]
    pub list: bool,
}

/// Execute lead command
pub fn execute(session: &Session, args: LeadArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.list {
        let styles: Vec<&str> = leadership::styles().collect();
        if session.json {
            return print_json(&styles);
        }
        for style in styles {
            println!("{}", style);
        }
        return Ok(());
    }

    let pattern = lead(&RequestContext::new(), &args.style);

    if session.json {
        return print_json(&serde_json::json!({ "style": args.style, "decision": pattern }));
    }
    println!("Decision inspired by {}: {}", args.style, pattern);

    Ok(())
}
