//! CLI subcommand implementations.

pub mod generate;
pub mod trace;
pub mod verify;
