//! Square board invariant: the grid is always `size` x `size`.

use super::Invariant;
use crate::Session;

/// Invariant: every row of the board holds exactly `size` cells and there
/// are exactly `size` rows.
pub struct SquareBoardInvariant;

impl Invariant<Session> for SquareBoardInvariant {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        let size = board.size();
        board.squares().len() == size * size
            && board.rows().all(|row| row.len() == size)
            && (size == 0 || board.rows().count() == size)
    }

    fn description() -> &'static str {
        "Board is square"
    }
}
