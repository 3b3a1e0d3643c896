//! Foresight CLI
//!
//! Command-line interface for scenario simulation and canned guidance

use clap::{Parser, Subcommand};
use foresight_core::logging_facility::{self, Profile};
use foresight_core::ForesightConfig;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "foresight")]
#[command(about = "Foresight - scenario simulation and decision guidance", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Logging profile (development, production, test); overrides the config
    #[arg(long, global = true)]
    log_profile: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate ranked market scenarios
    Simulate(commands::simulate::SimulateArgs),
    /// Retrieve past decisions relevant to a scenario description
    Recall(commands::recall::RecallArgs),
    /// Show the decision pattern of a leadership style
    Lead(commands::lead::LeadArgs),
    /// Ask the advisor about a business topic
    Advise(commands::advise::AdviseArgs),
}

/// Settings every command needs
pub struct Session {
    pub config: ForesightConfig,
    pub json: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => ForesightConfig::load(path)?,
        None => ForesightConfig::default(),
    };

    logging_facility::init(cli.log_profile.unwrap_or(config.logging.profile));

    let session = Session {
        config,
        json: cli.json,
    };

    match cli.command {
        Commands::Simulate(args) => commands::simulate::execute(&session, args),
        Commands::Recall(args) => commands::recall::execute(&session, args),
        Commands::Lead(args) => commands::lead::execute(&session, args),
        Commands::Advise(args) => commands::advise::execute(&session, args),
    }
}
