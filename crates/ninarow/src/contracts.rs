//! Move preconditions.
//!
//! Each check is a small unit that can be tested alone; [`LegalMove`]
//! composes them in the order a rejection is reported. All of them run
//! before the session is touched, which is what makes a rejected move a
//! no-op.

use crate::action::GameError;
use crate::board::Board;
use crate::session::Session;
use tracing::{instrument, warn};

/// Precondition: the session has not been won yet.
pub struct GameNotOver;

impl GameNotOver {
    #[instrument(skip(session))]
    pub fn check(session: &Session) -> Result<(), GameError> {
        if session.is_over() {
            warn!("Move rejected: game is over");
            Err(GameError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the coordinates lie on the current board.
pub struct WithinBounds;

impl WithinBounds {
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn check(board: &Board, row: usize, col: usize) -> Result<(), GameError> {
        let size = board.size();
        if row < size && col < size {
            Ok(())
        } else {
            warn!(row, col, size, "Move rejected: out of bounds");
            Err(GameError::OutOfBounds { row, col, size })
        }
    }
}

/// Precondition: nobody has played the target cell.
pub struct CellIsEmpty;

impl CellIsEmpty {
    #[instrument(skip(board))]
    pub fn check(board: &Board, row: usize, col: usize) -> Result<(), GameError> {
        let empty = match (isize::try_from(row), isize::try_from(col)) {
            (Ok(r), Ok(c)) => board.get(r, c).is_empty(),
            _ => true,
        };
        if empty {
            Ok(())
        } else {
            warn!(row, col, "Move rejected: cell occupied");
            Err(GameError::CellOccupied { row, col })
        }
    }
}

/// Composite precondition: the game is live, the cell exists and is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for placing a mark at (`row`, `col`).
    #[instrument(skip(session))]
    pub fn check(session: &Session, row: usize, col: usize) -> Result<(), GameError> {
        GameNotOver::check(session)?;
        WithinBounds::check(session.board(), row, col)?;
        CellIsEmpty::check(session.board(), row, col)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_within_bounds() {
        let board = Board::new(3);
        assert!(WithinBounds::check(&board, 2, 2).is_ok());
        assert!(matches!(
            WithinBounds::check(&board, 0, 3),
            Err(GameError::OutOfBounds { size: 3, .. })
        ));
    }

    #[test]
    fn test_cell_is_empty() {
        let mut board = Board::new(3);
        board.set(0, 1, Mark::new('x')).unwrap();
        assert!(CellIsEmpty::check(&board, 0, 0).is_ok());
        assert_eq!(
            CellIsEmpty::check(&board, 0, 1),
            Err(GameError::CellOccupied { row: 0, col: 1 })
        );
    }

    #[test]
    fn test_legal_move_reports_game_over_first() {
        let mut session = Session::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            session.on_cell_activated(row, col).unwrap();
        }
        assert!(session.is_over());
        // Occupied and off-board, but the finished game wins out.
        assert_eq!(
            LegalMove::check(&session, 0, 0),
            Err(GameError::GameAlreadyOver)
        );
        assert_eq!(
            LegalMove::check(&session, 9, 9),
            Err(GameError::GameAlreadyOver)
        );
    }

    #[test]
    fn test_legal_move_reports_bounds_before_occupancy() {
        let session = Session::new();
        assert!(matches!(
            LegalMove::check(&session, 3, 3),
            Err(GameError::OutOfBounds { .. })
        ));
        assert!(LegalMove::check(&session, 1, 1).is_ok());
    }
}
