//! Game session: turn order, configuration, win state and highlighting.
//!
//! The session exclusively owns its board. Every operation runs to
//! completion before returning, and a rejected operation leaves the
//! session exactly as it found it.

use crate::action::{GameError, Move};
use crate::board::Board;
use crate::config::{GameConfig, validate_players, validate_win_size};
use crate::contracts::LegalMove;
use crate::rules::{WinLine, check_win, min_moves_for_win};
use crate::types::{Mark, Square, SymbolTable};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the session.
///
/// There is no draw: a board filled without any winning line leaves the
/// session `InProgress`, and the only way forward is to expand the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "winner")]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// A line was completed by the given mark. Terminal.
    Won(Mark),
}

/// Input from the interface driving the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A cell was clicked; plays the current turn's mark there.
    CellActivated {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
    },
    /// Grow the grid by one ring.
    Expand,
    /// Change the winning run length.
    SetWinSize {
        /// New win size.
        value: usize,
    },
    /// Change the number of players.
    SetPlayers {
        /// New player count.
        value: usize,
    },
}

/// What an accepted event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// A move was recorded.
    Moved(MoveOutcome),
    /// The board grew to the given size.
    Expanded(usize),
    /// A configuration value changed.
    Configured,
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The recorded move.
    pub mv: Move,
    /// Lines completed by this move; empty if none.
    pub lines: Vec<WinLine>,
    /// Status after the move.
    pub status: GameStatus,
}

impl MoveOutcome {
    /// True if this move won the game.
    pub fn is_win(&self) -> bool {
        !self.lines.is_empty()
    }
}

/// Mutable aggregate for one game.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    symbols: SymbolTable,
    win_size: usize,
    players: usize,
    /// Moves made so far; the next mark is `symbols[turn % players]`.
    turn: usize,
    status: GameStatus,
    history: Vec<Move>,
    /// Every line ever found, in discovery order.
    win_lines: Vec<WinLine>,
    /// How many of `win_lines` have been handed out for highlighting.
    highlighted: usize,
}

impl Session {
    /// Creates a session with the default configuration: a 3x3 board,
    /// three in a row, two players.
    #[instrument]
    pub fn new() -> Self {
        let config = GameConfig::default();
        Self::build(&config, SymbolTable::default())
    }

    /// Creates a session from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if the configuration
    /// does not validate.
    #[instrument(skip(config))]
    pub fn with_config(config: &GameConfig) -> Result<Self, GameError> {
        let symbols = config.validate()?;
        info!(
            grid_size = config.grid_size(),
            win_size = config.win_size(),
            players = config.players(),
            "Creating session"
        );
        Ok(Self::build(config, symbols))
    }

    fn build(config: &GameConfig, symbols: SymbolTable) -> Self {
        Self {
            board: Board::new(*config.grid_size()),
            symbols,
            win_size: *config.win_size(),
            players: *config.players(),
            turn: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
            win_lines: Vec::new(),
            highlighted: 0,
        }
    }

    /// Plays the current turn's mark at (`row`, `col`).
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn on_cell_activated(&mut self, row: usize, col: usize) -> Result<MoveOutcome, GameError> {
        let mark = self.current_mark();
        self.apply_move(row, col, mark)
    }

    /// Records `mark` at (`row`, `col`) and checks for a win.
    ///
    /// The win scan is skipped until enough moves have been made for any
    /// line of the current win size to exist.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameAlreadyOver`] once the session has a winner.
    /// - [`GameError::OutOfBounds`] if the cell is off the board.
    /// - [`GameError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Mark) -> Result<MoveOutcome, GameError> {
        LegalMove::check(self, row, col)?;

        self.board.set(row, col, mark)?;
        let mv = Move::new(row, col, mark, self.turn);
        self.turn += 1;
        self.history.push(mv);
        debug!(%mv, "Move recorded");

        let lines = if self.turn >= min_moves_for_win(self.win_size, self.players) {
            check_win(&self.board, row, col, mark, self.win_size).into_lines()
        } else {
            Vec::new()
        };

        if !lines.is_empty() {
            info!(%mark, lines = lines.len(), "Game won");
            self.win_lines.extend(lines.iter().cloned());
            self.status = GameStatus::Won(mark);
        }

        #[cfg(debug_assertions)]
        {
            use crate::invariants::{InvariantSet, SessionInvariants};
            let checked = SessionInvariants::check_all(self);
            if let Err(violations) = &checked {
                tracing::error!(?violations, "Session invariants violated");
            }
            debug_assert!(checked.is_ok(), "session invariants violated after move");
        }

        Ok(MoveOutcome {
            mv,
            lines,
            status: self.status,
        })
    }

    /// Grows the board by one ring, shifting every mark by (+1, +1).
    ///
    /// Allowed at any time, including after the game is won. Win lines
    /// shift with the marks so highlighting stays on the same cells;
    /// recorded moves keep the coordinates they were played at.
    #[instrument(skip(self), fields(size = self.board.size()))]
    pub fn expand(&mut self) -> usize {
        self.board = self.board.expand();
        for line in &mut self.win_lines {
            line.shift_into_ring();
        }
        info!(size = self.board.size(), "Grid expanded");
        self.board.size()
    }

    /// Changes the winning run length for subsequent moves.
    ///
    /// Marks already on the board are not re-examined.
    #[instrument(skip(self))]
    pub fn set_win_size(&mut self, win_size: usize) -> Result<(), GameError> {
        validate_win_size(win_size)?;
        info!(from = self.win_size, to = win_size, "Win size changed");
        self.win_size = win_size;
        Ok(())
    }

    /// Changes the number of players for subsequent turns.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] for zero or for more
    /// players than the symbol table holds.
    #[instrument(skip(self))]
    pub fn set_player_count(&mut self, players: usize) -> Result<(), GameError> {
        validate_players(players, &self.symbols)?;
        info!(from = self.players, to = players, "Player count changed");
        self.players = players;
        Ok(())
    }

    /// Dispatches an interface event.
    #[instrument(skip(self))]
    pub fn apply(&mut self, event: SessionEvent) -> Result<EventOutcome, GameError> {
        match event {
            SessionEvent::CellActivated { row, col } => {
                self.on_cell_activated(row, col).map(EventOutcome::Moved)
            }
            SessionEvent::Expand => Ok(EventOutcome::Expanded(self.expand())),
            SessionEvent::SetWinSize { value } => {
                self.set_win_size(value).map(|()| EventOutcome::Configured)
            }
            SessionEvent::SetPlayers { value } => {
                self.set_player_count(value).map(|()| EventOutcome::Configured)
            }
        }
    }

    /// Returns win lines found since the last call and advances the cursor.
    ///
    /// Lines are handed out once each, so an interface can highlight new
    /// lines without repainting old ones.
    #[instrument(skip(self), fields(highlighted = self.highlighted))]
    pub fn take_unhighlighted(&mut self) -> &[WinLine] {
        let start = self.highlighted;
        self.highlighted = self.win_lines.len();
        &self.win_lines[start..]
    }

    /// Mark whose turn it is.
    pub fn current_mark(&self) -> Mark {
        self.symbols.mark_for_turn(self.turn, self.players)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the session status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once a line has been completed.
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Won(_))
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won(mark) => Some(mark),
            GameStatus::InProgress => None,
        }
    }

    /// Number of moves made.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Current winning run length.
    pub fn win_size(&self) -> usize {
        self.win_size
    }

    /// Current number of players.
    pub fn players(&self) -> usize {
        self.players
    }

    /// Returns the symbol table.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns every win line found so far.
    pub fn win_lines(&self) -> &[WinLine] {
        &self.win_lines
    }

    /// Builds a serializable snapshot for rendering.
    #[instrument(skip(self))]
    pub fn view(&self) -> SessionView {
        SessionView {
            size: self.board.size(),
            rows: self
                .board
                .rows()
                .map(|row| row.iter().copied().map(Square::mark).collect())
                .collect(),
            current_mark: self.current_mark(),
            status: self.status,
            win_size: self.win_size,
            players: self.players,
            turn: self.turn,
            symbols: self.symbols.clone(),
            win_lines: self.win_lines.clone(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-data snapshot of a session for an interface to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Board edge length.
    pub size: usize,
    /// Board rows, top to bottom; `None` for empty cells.
    pub rows: Vec<Vec<Option<Mark>>>,
    /// Mark whose turn it is.
    pub current_mark: Mark,
    /// Session status, including the winner.
    pub status: GameStatus,
    /// Current winning run length.
    pub win_size: usize,
    /// Current number of players.
    pub players: usize,
    /// Moves made so far.
    pub turn: usize,
    /// Player marks in turn order.
    pub symbols: SymbolTable,
    /// Every win line found so far.
    pub win_lines: Vec<WinLine>,
}
