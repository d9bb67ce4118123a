//! Win detection around the last move.
//!
//! Only lines through the cell just played can have been completed by it,
//! so the scan starts there and walks outward along each axis instead of
//! enumerating every line on the board.

use crate::board::Board;
use crate::types::{Cell, Mark, Square};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// One of the four axes a line can lie on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    /// Down a column; step (1, 0).
    Vertical,
    /// Along a row; step (0, 1).
    Horizontal,
    /// Top-left to bottom-right; step (1, 1).
    DiagonalDown,
    /// Bottom-left to top-right; step (-1, 1).
    DiagonalUp,
}

impl Direction {
    /// Row and column step for the positive sense of this axis.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (1, 0),
            Direction::Horizontal => (0, 1),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }
}

/// A run of at least `win_size` same-mark cells on one axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    mark: Mark,
    direction: Direction,
    /// Contiguous, from the furthest cell in the negative sense to the
    /// furthest in the positive sense.
    cells: Vec<Cell>,
}

impl WinLine {
    /// The mark that owns every cell of the line.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Axis the line lies on.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cells of the line in order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells in the line.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a detected line.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Moves every cell by (+1, +1) to follow a ring expansion.
    pub(crate) fn shift_into_ring(&mut self) {
        for cell in &mut self.cells {
            cell.row += 1;
            cell.col += 1;
        }
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells = self
            .cells
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{} {}: {}", self.mark, self.direction, cells)
    }
}

/// Verdict of a win check: every line the move completed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WinCheck {
    lines: Vec<WinLine>,
}

impl WinCheck {
    /// True if at least one line was found.
    pub fn is_win(&self) -> bool {
        !self.lines.is_empty()
    }

    /// Lines found, in axis order.
    pub fn lines(&self) -> &[WinLine] {
        &self.lines
    }

    /// Consumes the verdict, yielding its lines.
    pub fn into_lines(self) -> Vec<WinLine> {
        self.lines
    }
}

/// Fewest total moves before any line of `win_size` can exist with
/// `players` taking turns.
///
/// Checking earlier is harmless but pointless; the session skips the scan
/// until the turn counter reaches this value.
pub fn min_moves_for_win(win_size: usize, players: usize) -> usize {
    (win_size * players).saturating_sub(1)
}

/// Collects consecutive `mark` cells beyond `origin` in the sense of `step`.
/// Stops at the first mismatch; off-board reads are empty.
fn walk(board: &Board, origin: (isize, isize), step: (isize, isize), mark: Mark) -> Vec<Cell> {
    let (row, col) = origin;
    let (dr, dc) = step;
    let target = Square::Occupied(mark);

    let mut cells = Vec::new();
    let mut k: isize = 1;
    while board.get(row + k * dr, col + k * dc) == target {
        // Matched cells are on the board, so both coordinates are non-negative.
        cells.push(Cell::new((row + k * dr) as usize, (col + k * dc) as usize));
        k += 1;
    }
    cells
}

/// Checks every axis through (`row`, `col`) for a run of `mark` at least
/// `win_size` long.
///
/// The origin counts toward the run. A single move can complete several
/// lines at once; all of them are returned, each holding exactly the
/// matched cells rather than being truncated to `win_size`. The result is
/// a pure function of its inputs.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_win(board: &Board, row: usize, col: usize, mark: Mark, win_size: usize) -> WinCheck {
    let (Ok(r), Ok(c)) = (isize::try_from(row), isize::try_from(col)) else {
        return WinCheck::default();
    };

    let lines = Direction::iter()
        .filter_map(|direction| {
            let (dr, dc) = direction.step();
            let backward = walk(board, (r, c), (-dr, -dc), mark);
            let forward = walk(board, (r, c), (dr, dc), mark);

            let count = backward.len() + 1 + forward.len();
            if count < win_size {
                return None;
            }

            let mut cells = Vec::with_capacity(count);
            cells.extend(backward.into_iter().rev());
            cells.push(Cell::new(row, col));
            cells.extend(forward);

            debug!(%mark, %direction, count, "Line completed");
            Some(WinLine {
                mark,
                direction,
                cells,
            })
        })
        .collect();

    WinCheck { lines }
}
