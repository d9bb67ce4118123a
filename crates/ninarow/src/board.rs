//! Square, growable game board.

use crate::action::GameError;
use crate::types::{Cell, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Square board of `size` x `size` cells.
///
/// The board only ever grows, one ring at a time, so its size keeps the
/// parity it was created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Edge length.
    size: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board of `size` x `size` cells.
    ///
    /// A board smaller than the win size is allowed; no line can complete
    /// on it until it grows.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Builds a board from row-major squares.
    ///
    /// Returns `None` unless `squares.len() == size * size`.
    pub(crate) fn from_squares(size: usize, squares: Vec<Square>) -> Option<Self> {
        (squares.len() == size * size).then_some(Self { size, squares })
    }

    /// Edge length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the coordinates lie on the board.
    pub fn contains(&self, row: isize, col: isize) -> bool {
        self.index(row, col).is_some()
    }

    fn index(&self, row: isize, col: isize) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Reads a cell; anything off the board reads as [`Square::Empty`].
    ///
    /// Line scans walk outward with signed offsets and stop at the first
    /// mismatch, so the edge needs no separate check.
    pub fn get(&self, row: isize, col: isize) -> Square {
        self.index(row, col)
            .map(|idx| self.squares[idx])
            .unwrap_or(Square::Empty)
    }

    /// Reads the cell at `cell`, or [`Square::Empty`] if it is off the board.
    pub fn at(&self, cell: Cell) -> Square {
        match (isize::try_from(cell.row), isize::try_from(cell.col)) {
            (Ok(row), Ok(col)) => self.get(row, col),
            _ => Square::Empty,
        }
    }

    /// Places `mark` on an empty cell.
    ///
    /// # Errors
    ///
    /// - [`GameError::OutOfBounds`] if the cell is off the board.
    /// - [`GameError::CellOccupied`] if the cell already holds a mark.
    ///
    /// The board is untouched on error.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn set(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), GameError> {
        if row >= self.size || col >= self.size {
            return Err(GameError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        let idx = row * self.size + col;
        if !self.squares[idx].is_empty() {
            return Err(GameError::CellOccupied { row, col });
        }
        self.squares[idx] = Square::Occupied(mark);
        trace!(row, col, %mark, "Square set");
        Ok(())
    }

    /// Returns a board one ring larger with every mark shifted by (+1, +1).
    pub fn expand(&self) -> Board {
        crate::expander::expand(self)
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        // chunks() rejects a zero chunk size
        self.squares.chunks(self.size.max(1))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|sq| !sq.is_empty()).count()
    }

    /// Checks if every cell holds a mark.
    ///
    /// A full board does not end the game; see [`crate::GameStatus`].
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|sq| !sq.is_empty())
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|sq| match sq {
                        Square::Empty => ".".to_string(),
                        Square::Occupied(mark) => mark.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(3)
    }
}
