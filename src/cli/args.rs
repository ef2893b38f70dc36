use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};

use super::commands;

/// Entry point for the `llm-council` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "llm-council",
    about = "Inspect the LLM council configuration",
    version,
    long_about = None
)]
pub struct Cli {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Load this environment file instead of searching for `.env`
    #[arg(long = "env-file", global = true)]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the resolved configuration with the API key masked.
    Show(ShowArgs),
    /// List the council members in order and mark the chairman.
    Models,
    /// Fail with a non-zero exit code when the configuration is unusable.
    Check,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        commands::run(self)
    }
}
