//! ninarow - scripted driver for N-in-a-row sessions
//!
//! Plays the part of the user interface: turns recorded clicks and
//! configuration changes into session calls and renders what comes back.

#![warn(missing_docs)]

mod cli;
mod script;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use ninarow::{GameConfig, GameStatus, Session};
use script::Script;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay {
            script,
            config,
            json,
        } => run_replay(script, config, json),
    }
}

/// Replay a script and print the resulting session
#[instrument]
fn run_replay(script_path: PathBuf, config_path: Option<PathBuf>, json: bool) -> Result<()> {
    let script = Script::from_file(&script_path)?;

    let config = match config_path {
        Some(path) => GameConfig::from_file(&path)?,
        None => script.config.clone().unwrap_or_default(),
    };
    let mut session = Session::with_config(&config).context("Invalid game configuration")?;

    info!(script = %script_path.display(), "Replaying script");
    let report = script::replay(&mut session, &script.events);
    info!(
        accepted = report.accepted,
        rejected = report.rejected,
        "Replay finished"
    );

    if json {
        let view = session.view();
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", session.board().display());
    println!();
    match session.status() {
        GameStatus::Won(mark) => println!("Winner: {mark}"),
        GameStatus::InProgress => println!("In progress, {} to move", session.current_mark()),
    }
    for line in &report.highlights {
        println!("Line: {line}");
    }

    Ok(())
}
