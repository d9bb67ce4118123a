//! Scripted interface events.
//!
//! A script stands in for a clicking user: an optional `[config]` table
//! followed by the events in the order they happened.
//!
//! ```toml
//! [config]
//! win_size = 3
//!
//! [[events]]
//! kind = "cell_activated"
//! row = 1
//! col = 1
//!
//! [[events]]
//! kind = "expand"
//! ```

use derive_more::{Display, Error};
use ninarow::{EventOutcome, GameConfig, Session, SessionEvent, WinLine};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// A parsed event script.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    /// Starting configuration; defaults apply when absent.
    #[serde(default)]
    pub config: Option<GameConfig>,

    /// Events in arrival order.
    #[serde(default)]
    pub events: Vec<SessionEvent>,
}

/// Script loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl Script {
    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::new(format!("Failed to read script: {}", e)))?;
        let script: Self = toml::from_str(&content)
            .map_err(|e| ScriptError::new(format!("Failed to parse script: {}", e)))?;
        info!(events = script.events.len(), "Script loaded");
        Ok(script)
    }
}

/// What happened while replaying a script.
#[derive(Debug, Default)]
pub struct Replay {
    /// Events the session accepted.
    pub accepted: usize,
    /// Events the session rejected and that were skipped.
    pub rejected: usize,
    /// Win lines to highlight, in the order they were found.
    pub highlights: Vec<WinLine>,
}

/// Feeds every event to `session`, skipping the ones it rejects.
///
/// A rejected event leaves the session untouched, so replay simply moves
/// on to the next one.
#[instrument(skip_all, fields(events = events.len()))]
pub fn replay(session: &mut Session, events: &[SessionEvent]) -> Replay {
    let mut report = Replay::default();
    for (index, event) in events.iter().enumerate() {
        match session.apply(*event) {
            Ok(outcome) => {
                report.accepted += 1;
                if let EventOutcome::Moved(mv) = &outcome {
                    debug!(index, mv = %mv.mv, "Move accepted");
                }
                report
                    .highlights
                    .extend(session.take_unhighlighted().iter().cloned());
            }
            Err(e) => {
                report.rejected += 1;
                warn!(index, ?event, error = %e, "Event rejected; skipping");
            }
        }
    }
    report
}
