//! Stimulus generation command.

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;
use tamiz_core::{Mode, Profile, SAMPLE_MASK};
use tamiz_model::{CycleRecord, Stimulus};

/// Mode names for clap
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum CliMode {
    #[default]
    Bypass,
    Average,
    Weighted,
    Difference,
}

impl From<CliMode> for Mode {
    fn from(m: CliMode) -> Self {
        match m {
            CliMode::Bypass => Mode::Bypass,
            CliMode::Average => Mode::Average,
            CliMode::Weighted => Mode::Weighted,
            CliMode::Difference => Mode::Difference,
        }
    }
}

/// Profile names for clap
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum CliProfile {
    #[default]
    ModeDispatch,
    FixedAverage,
}

impl From<CliProfile> for Profile {
    fn from(p: CliProfile) -> Self {
        match p {
            CliProfile::ModeDispatch => Profile::ModeDispatch,
            CliProfile::FixedAverage => Profile::FixedAverage,
        }
    }
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    command: GenerateCommand,
}

/// Options shared by every pattern.
#[derive(Args)]
struct CommonArgs {
    /// Output stimulus file (.toml or .json)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Number of active cycles
    #[arg(long, default_value = "32")]
    cycles: usize,

    /// Filter mode driven on every cycle
    #[arg(long, value_enum, default_value = "bypass")]
    mode: CliMode,

    /// Engine profile
    #[arg(long, value_enum, default_value = "mode-dispatch")]
    profile: CliProfile,

    /// Reset cycles to prepend before the pattern
    #[arg(long, default_value = "1")]
    reset_cycles: usize,
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// A single full-scale sample followed by silence
    Impulse {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// A constant full-scale input
    Step {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// A ramp through the sample range
    Ramp {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Alternating zero and full-scale samples
    Alternating {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Uniform random samples from a seeded PRNG
    Random {
        #[command(flatten)]
        common: CommonArgs,

        /// PRNG seed
        #[arg(long, default_value = "305419896")]
        seed: u32,
    },
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let (name, common, samples) = match args.command {
        GenerateCommand::Impulse { common } => {
            let mut samples = vec![0u8; common.cycles];
            if !samples.is_empty() {
                samples[0] = SAMPLE_MASK as u8;
            }
            ("impulse", common, samples)
        }

        GenerateCommand::Step { common } => {
            let samples = vec![SAMPLE_MASK as u8; common.cycles];
            ("step", common, samples)
        }

        GenerateCommand::Ramp { common } => {
            let samples = (0..common.cycles)
                .map(|i| (i as u8) & SAMPLE_MASK as u8)
                .collect();
            ("ramp", common, samples)
        }

        GenerateCommand::Alternating { common } => {
            let samples = (0..common.cycles)
                .map(|i| if i % 2 == 0 { SAMPLE_MASK as u8 } else { 0 })
                .collect();
            ("alternating", common, samples)
        }

        GenerateCommand::Random { common, seed } => {
            let mut state = if seed == 0 { 1 } else { seed };
            let samples = (0..common.cycles)
                .map(|_| {
                    // xorshift32
                    state ^= state << 13;
                    state ^= state >> 17;
                    state ^= state << 5;
                    (state & u32::from(SAMPLE_MASK)) as u8
                })
                .collect();
            ("random", common, samples)
        }
    };

    let mode: Mode = common.mode.into();
    let mut stimulus = Stimulus::new(name)
        .with_profile(common.profile.into())
        .with_description(format!("{name} pattern, {} cycles, mode {mode}", common.cycles));

    for _ in 0..common.reset_cycles {
        stimulus.push(CycleRecord::reset());
    }
    for sample in samples {
        stimulus.push(CycleRecord::active(sample, mode));
    }

    stimulus.save(&common.output)?;
    println!(
        "Wrote {} cycles to {}",
        stimulus.len(),
        common.output.display()
    );

    Ok(())
}
