//! Game rules for N-in-a-row.
//!
//! Pure functions over a board. Rules are kept apart from board storage
//! and turn bookkeeping so they can be re-run on any board in tests.

pub mod win;

pub use win::{Direction, WinCheck, WinLine, check_win, min_moves_for_win};
