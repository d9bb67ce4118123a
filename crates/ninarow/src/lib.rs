//! N-in-a-row on an expandable square grid.
//!
//! Tic-tac-toe generalized: any number of players (up to the symbol
//! table), any winning run length, and a board that can grow by one ring
//! at a time while a game is under way.
//!
//! # Architecture
//!
//! - **Board**: square grid with boundary-safe reads
//! - **Rules**: win detection around the last move
//! - **Expander**: ring growth preserving every mark's neighbours
//! - **Session**: turn order, configuration, win state, highlighting
//!
//! The crate has no interface of its own. A front end feeds it
//! [`SessionEvent`]s and renders the [`SessionView`] it gets back.
//!
//! # Example
//!
//! ```
//! use ninarow::{GameStatus, Mark, Session};
//!
//! let mut session = Session::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 2), (0, 2)] {
//!     session.on_cell_activated(row, col).unwrap();
//! }
//! assert_eq!(session.status(), GameStatus::Won(Mark::new('x')));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod expander;
mod session;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use types::{Cell, DEFAULT_SYMBOLS, Mark, Square, SymbolTable};

// Crate-level exports - Moves and errors
pub use action::{GameError, Move};

// Crate-level exports - Board
pub use board::Board;
pub use expander::expand;

// Crate-level exports - Rules
pub use rules::{Direction, WinCheck, WinLine, check_win, min_moves_for_win};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Session
pub use session::{EventOutcome, GameStatus, MoveOutcome, Session, SessionEvent, SessionView};
