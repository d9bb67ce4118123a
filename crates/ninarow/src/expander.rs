//! Ring expansion of the board.

use crate::board::Board;
use crate::types::Square;
use tracing::{debug, instrument};

/// Grows `board` by one empty ring on all four sides.
///
/// The result is `size + 2` on each edge; a mark at `(r, c)` moves to
/// `(r + 1, c + 1)`, so adjacency between existing marks is unchanged.
/// Expansion never triggers a win check.
#[instrument(skip(board), fields(size = board.size()))]
pub fn expand(board: &Board) -> Board {
    let old = board.size();
    let size = old + 2;

    let mut squares = Vec::with_capacity(size * size);
    squares.extend(std::iter::repeat_n(Square::Empty, size));
    for row in board.rows().take(old) {
        squares.push(Square::Empty);
        squares.extend_from_slice(row);
        squares.push(Square::Empty);
    }
    squares.extend(std::iter::repeat_n(Square::Empty, size));

    debug!(from = old, to = size, "Board expanded");
    Board::from_squares(size, squares).unwrap_or_else(|| Board::new(size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_expand_centered_mark() {
        let mut board = Board::new(3);
        board.set(1, 1, Mark::new('x')).unwrap();

        let grown = expand(&board);
        assert_eq!(grown.size(), 5);
        assert_eq!(grown.get(2, 2), Square::Occupied(Mark::new('x')));
        assert_eq!(grown.occupied_count(), 1);
    }

    #[test]
    fn test_expand_keeps_corners_adjacent() {
        let mut board = Board::new(3);
        board.set(0, 0, Mark::new('x')).unwrap();
        board.set(0, 1, Mark::new('o')).unwrap();
        board.set(2, 2, Mark::new('Δ')).unwrap();

        let grown = expand(&board);
        assert_eq!(grown.get(1, 1), Square::Occupied(Mark::new('x')));
        assert_eq!(grown.get(1, 2), Square::Occupied(Mark::new('o')));
        assert_eq!(grown.get(3, 3), Square::Occupied(Mark::new('Δ')));
        for i in 0..5 {
            assert!(grown.get(0, i).is_empty());
            assert!(grown.get(4, i).is_empty());
            assert!(grown.get(i, 0).is_empty());
            assert!(grown.get(i, 4).is_empty());
        }
    }

    #[test]
    fn test_expand_empty_board() {
        let grown = expand(&Board::new(0));
        assert_eq!(grown.size(), 2);
        assert_eq!(grown.occupied_count(), 0);
    }

    #[test]
    fn test_expand_twice() {
        let board = Board::new(3).expand().expand();
        assert_eq!(board.size(), 7);
        assert_eq!(board.squares().len(), 49);
    }
}
