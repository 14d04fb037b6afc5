//! Conformance verification command.

use clap::Args;
use std::path::PathBuf;
use tamiz_model::{Stimulus, run_conformance};
use tracing::{debug, info};

#[derive(Args)]
pub struct VerifyArgs {
    /// Stimulus file (.toml or .json)
    #[arg(value_name = "STIMULUS")]
    stimulus: PathBuf,

    /// Print the full output trace on success
    #[arg(long)]
    show_outputs: bool,
}

pub fn run(args: VerifyArgs) -> anyhow::Result<()> {
    let stimulus = Stimulus::load(&args.stimulus)?;
    info!(
        name = %stimulus.name,
        cycles = stimulus.len(),
        profile = ?stimulus.profile,
        "verifying stimulus"
    );

    match run_conformance(&stimulus) {
        Ok(report) => {
            debug!(cycles = report.cycles, "conformance run complete");
            println!(
                "OK: {} cycles, core and reference model agree",
                report.cycles
            );
            if args.show_outputs {
                for (cycle, output) in report.outputs.iter().enumerate() {
                    println!("  cycle {cycle:4}: output {output:3}");
                }
            }
            Ok(())
        }
        Err(mismatch) => {
            anyhow::bail!("conformance mismatch: {mismatch}")
        }
    }
}
