//! Cycle-by-cycle trace command.

use clap::Args;
use std::path::PathBuf;
use tamiz_model::{Stimulus, run_trace};
use tracing::info;

#[derive(Args)]
pub struct TraceArgs {
    /// Stimulus file (.toml or .json)
    #[arg(value_name = "STIMULUS")]
    stimulus: PathBuf,
}

pub fn run(args: TraceArgs) -> anyhow::Result<()> {
    let stimulus = Stimulus::load(&args.stimulus)?;
    info!(name = %stimulus.name, cycles = stimulus.len(), "tracing stimulus");

    println!("Stimulus: {}", stimulus.name);
    if let Some(description) = &stimulus.description {
        println!("  {description}");
    }
    println!();
    println!("cycle  en rst sample mode        x0  x1  x2  x3  | out");
    println!("-----  -- --- ------ ----------  --- --- --- --- | ---");

    for row in run_trace(&stimulus) {
        let [x0, x1, x2, x3] = row.history;
        println!(
            "{:5}  {:2} {:3} {:6} {:<10}  {:3} {:3} {:3} {:3} | {:3}",
            row.cycle,
            u8::from(row.input.enable),
            u8::from(row.input.reset),
            row.input.sample,
            row.input.mode.to_string(),
            x0,
            x1,
            x2,
            x3,
            row.output
        );
    }

    Ok(())
}
