//! Property tests for board and detector guarantees.

use ninarow::{Board, GameError, Mark, Session, Square, check_win};
use proptest::prelude::*;

fn mark_strategy() -> impl Strategy<Value = Mark> {
    prop::sample::select(vec![
        Mark::new('x'),
        Mark::new('o'),
        Mark::new('Δ'),
        Mark::new('Ω'),
    ])
}

/// A board of `1..8` cells per edge with a random subset of cells filled.
fn board_strategy() -> impl Strategy<Value = Board> {
    (1usize..8).prop_flat_map(|size| {
        prop::collection::vec(prop::option::of(mark_strategy()), size * size).prop_map(
            move |cells| {
                let mut board = Board::new(size);
                for (idx, cell) in cells.into_iter().enumerate() {
                    if let Some(mark) = cell {
                        board.set(idx / size, idx % size, mark).unwrap();
                    }
                }
                board
            },
        )
    })
}

/// Cell sequences for whole games on a 5x5 board.
fn moves_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..5, 0usize..5), 0..40)
}

proptest! {
    #[test]
    fn out_of_range_reads_are_empty(board in board_strategy(), row in -20isize..20, col in -20isize..20) {
        let size = board.size() as isize;
        if row < 0 || col < 0 || row >= size || col >= size {
            prop_assert_eq!(board.get(row, col), Square::Empty);
        }
    }

    #[test]
    fn occupied_cell_is_never_overwritten(board in board_strategy(), mark in mark_strategy()) {
        let size = board.size();
        for row in 0..size {
            for col in 0..size {
                if !board.get(row as isize, col as isize).is_empty() {
                    let mut copy = board.clone();
                    prop_assert_eq!(
                        copy.set(row, col, mark),
                        Err(GameError::CellOccupied { row, col })
                    );
                    prop_assert_eq!(&copy, &board);
                }
            }
        }
    }

    #[test]
    fn expansion_shifts_marks_and_adds_empty_ring(board in board_strategy()) {
        let grown = board.expand();
        let size = board.size();
        prop_assert_eq!(grown.size(), size + 2);
        prop_assert_eq!(grown.occupied_count(), board.occupied_count());
        for row in 0..size as isize {
            for col in 0..size as isize {
                prop_assert_eq!(grown.get(row + 1, col + 1), board.get(row, col));
            }
        }
        let last = (size + 1) as isize;
        for i in 0..=last {
            prop_assert!(grown.get(0, i).is_empty());
            prop_assert!(grown.get(last, i).is_empty());
            prop_assert!(grown.get(i, 0).is_empty());
            prop_assert!(grown.get(i, last).is_empty());
        }
    }

    #[test]
    fn win_lines_are_contiguous_runs_of_one_mark(
        board in board_strategy(),
        win_size in 1usize..5,
    ) {
        let size = board.size();
        for row in 0..size {
            for col in 0..size {
                let Some(mark) = board.get(row as isize, col as isize).mark() else { continue };
                for line in check_win(&board, row, col, mark, win_size).lines() {
                    prop_assert!(line.len() >= win_size);
                    prop_assert_eq!(line.mark(), mark);
                    let (dr, dc) = line.direction().step();
                    for pair in line.cells().windows(2) {
                        prop_assert_eq!(pair[1].row as isize - pair[0].row as isize, dr);
                        prop_assert_eq!(pair[1].col as isize - pair[0].col as isize, dc);
                    }
                    for cell in line.cells() {
                        prop_assert_eq!(board.at(*cell), Square::Occupied(mark));
                    }
                }
            }
        }
    }

    #[test]
    fn replaying_a_game_is_deterministic(moves in moves_strategy(), players in 2usize..5) {
        let run = || {
            let config = ninarow::GameConfig::default()
                .with_grid_size(5)
                .with_players(players);
            let mut session = Session::with_config(&config).unwrap();
            let results: Vec<_> = moves
                .iter()
                .map(|&(row, col)| session.on_cell_activated(row, col))
                .collect();
            (results, session.win_lines().to_vec(), session.status())
        };
        prop_assert_eq!(run(), run());
    }

    #[test]
    fn rejected_moves_leave_session_unchanged(moves in moves_strategy()) {
        let config = ninarow::GameConfig::default().with_grid_size(5);
        let mut session = Session::with_config(&config).unwrap();
        for (row, col) in moves {
            let board = session.board().clone();
            let turn = session.turn();
            if session.on_cell_activated(row, col).is_err() {
                prop_assert_eq!(session.board(), &board);
                prop_assert_eq!(session.turn(), turn);
            }
        }
    }
}
