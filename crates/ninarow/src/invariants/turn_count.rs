//! Turn count invariant: one mark on the board per recorded move.

use super::Invariant;
use crate::Session;

/// Invariant: the turn counter, the move history length and the number of
/// occupied cells agree.
///
/// Expansion moves marks but never adds or removes one, so this holds
/// across ring growth too.
pub struct TurnCountInvariant;

impl Invariant<Session> for TurnCountInvariant {
    fn holds(session: &Session) -> bool {
        let turn = session.turn();
        turn == session.history().len() && turn == session.board().occupied_count()
    }

    fn description() -> &'static str {
        "Turn counter matches recorded moves and marks on the board"
    }
}
