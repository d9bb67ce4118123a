//! Command-line interface for ninarow.

use clap::{Parser, Subcommand};

/// ninarow - N-in-a-row on an expandable grid
#[derive(Parser, Debug)]
#[command(name = "ninarow")]
#[command(about = "Drive an N-in-a-row session from a scripted event log", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a TOML script of interface events and print the result
    Replay {
        /// Path to the event script
        script: std::path::PathBuf,

        /// Game configuration file; overrides the script's [config] table
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Print the final session snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}
