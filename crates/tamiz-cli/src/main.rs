//! Tamiz CLI - drive, trace and verify the filter core model.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tamiz")]
#[command(author, version, about = "Filter core model CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a stimulus through the core and the reference model and compare
    Verify(commands::verify::VerifyArgs),

    /// Print a cycle-by-cycle trace of a stimulus run
    Trace(commands::trace::TraceArgs),

    /// Generate stimulus files for canned patterns
    Generate(commands::generate::GenerateArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Verify(args) => commands::verify::run(args),
        Commands::Trace(args) => commands::trace::run(args),
        Commands::Generate(args) => commands::generate::run(args),
    }
}
