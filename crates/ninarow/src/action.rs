//! Recorded moves and the errors that reject them.
//!
//! A move is a domain event: once recorded it never changes, and it keeps
//! the coordinates it was played at even if the grid grows afterwards.

use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};

/// A mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row the mark was placed in.
    pub row: usize,
    /// Column the mark was placed in.
    pub col: usize,
    /// The mark placed.
    pub mark: Mark,
    /// Turn counter value when the move was played (zero-based).
    pub move_index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize, mark: Mark, move_index: usize) -> Self {
        Self {
            row,
            col,
            mark,
            move_index,
        }
    }

    /// Returns the coordinates of this move.
    pub fn cell(&self) -> Cell {
        Cell::new(self.row, self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} -> ({}, {})",
            self.move_index + 1,
            self.mark,
            self.row,
            self.col
        )
    }
}

/// Error that rejects a move or a configuration change.
///
/// Every rejection leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Coordinates fall outside the current board.
    #[display("Cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board size at the time of the request.
        size: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The session has a winner; no further moves are accepted.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// A win size, player count or symbol table was rejected.
    #[display("Invalid configuration: {_0}")]
    InvalidConfiguration(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mv = Move::new(1, 2, Mark::new('x'), 0);
        assert_eq!(mv.to_string(), "#1 x -> (1, 2)");
        assert_eq!(mv.cell(), Cell::new(1, 2));
    }

    #[test]
    fn test_error_messages() {
        let err = GameError::OutOfBounds {
            row: 3,
            col: 0,
            size: 3,
        };
        assert!(err.to_string().contains("outside the 3x3 board"));
        assert!(
            GameError::CellOccupied { row: 0, col: 0 }
                .to_string()
                .contains("occupied")
        );
    }
}
