//! Core domain types for N-in-a-row.

use crate::action::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The symbol identifying which player occupies a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct Mark(char);

impl Mark {
    /// Creates a mark from its display symbol.
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Returns the display symbol.
    pub fn symbol(self) -> char {
        self.0
    }
}

impl From<char> for Mark {
    fn from(symbol: char) -> Self {
        Self(symbol)
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell occupied by a player's mark.
    Occupied(Mark),
}

impl Square {
    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// Zero-based board coordinates.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Cell {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Cell {
    /// Creates a cell coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Default player symbols, in turn order.
pub const DEFAULT_SYMBOLS: [char; 4] = ['x', 'o', 'Δ', 'Ω'];

/// Ordered mapping from player index to display mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Mark>", into = "Vec<Mark>")]
pub struct SymbolTable {
    marks: Vec<Mark>,
}

impl SymbolTable {
    /// Creates a symbol table.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `marks` is empty or repeats a symbol.
    #[instrument]
    pub fn new(marks: Vec<Mark>) -> Result<Self, GameError> {
        if marks.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "symbol table must not be empty".to_string(),
            ));
        }
        for (index, mark) in marks.iter().enumerate() {
            if marks[..index].contains(mark) {
                return Err(GameError::InvalidConfiguration(format!(
                    "symbol {mark} appears more than once"
                )));
            }
        }
        Ok(Self { marks })
    }

    /// Number of distinct symbols, the upper bound for the player count.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Always false; a table holds at least one symbol.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns the mark for the given player index, if defined.
    pub fn get(&self, player: usize) -> Option<Mark> {
        self.marks.get(player).copied()
    }

    /// Returns the mark whose turn it is after `turn` moves among `players`.
    ///
    /// `players` must be in `1..=self.len()`.
    pub fn mark_for_turn(&self, turn: usize, players: usize) -> Mark {
        self.marks[turn % players]
    }

    /// Returns all marks in turn order.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self {
            marks: DEFAULT_SYMBOLS.into_iter().map(Mark::new).collect(),
        }
    }
}

impl TryFrom<Vec<Mark>> for SymbolTable {
    type Error = GameError;

    fn try_from(marks: Vec<Mark>) -> Result<Self, Self::Error> {
        Self::new(marks)
    }
}

impl From<SymbolTable> for Vec<Mark> {
    fn from(table: SymbolTable) -> Self {
        table.marks
    }
}
