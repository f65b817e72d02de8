use tracing::trace;

use crate::{Board, Cell, Player};

/// Runs never need to be longer than this, even on the largest boards.
pub const MAX_WIN_LENGTH: usize = 5;

/// How many marks in a row win on a board of the given size.
pub fn win_length(size: usize) -> usize {
    size.min(MAX_WIN_LENGTH)
}

/// Does the player have [`win_length()`] marks in a row on any row, column
/// or diagonal?
///
/// The run may sit anywhere inside a longer line. Lines never wrap into each
/// other.
pub fn is_win(board: &Board, player: Player) -> bool {
    let needed = win_length(board.size());
    let mark = player.mark();
    board
        .lines()
        .filter(|line| line.len() >= needed)
        .any(|line| {
            let won = contains_run(board.cells_along(line), mark, needed);
            if won {
                trace!(%player, orientation = ?line.orientation(), start = ?line.start(), "Winning line");
            }
            won
        })
}

/// The player who has a winning line, if any.
///
/// When called after every move, at most one player can have one.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| is_win(board, player))
}

/// Is every cell taken?
///
/// A full board is only a draw if the last move did not win, so check
/// [`is_win()`] first.
pub fn is_draw(board: &Board) -> bool {
    board.empty_cells() == 0
}

fn contains_run(cells: impl Iterator<Item = Cell>, mark: Cell, needed: usize) -> bool {
    let mut run = 0;
    for cell in cells {
        if cell == mark {
            run += 1;
            if run >= needed {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::RandomBoard;
    use crate::{Line, Orientation};

    fn board_with(size: usize, marks: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &(row, col, player) in marks {
            board.set(row, col, player).unwrap();
        }
        board
    }

    /// Checks every cell as the start of a run in every direction.
    fn brute_force_win(board: &Board, player: Player) -> bool {
        let size = board.size() as isize;
        let needed = win_length(board.size()) as isize;
        for row in 0..size {
            for col in 0..size {
                for (dr, dc) in [(0, 1), (1, 0), (1, 1), (1, -1)] {
                    let all_marked = (0..needed).all(|k| {
                        let (r, c) = (row + dr * k, col + dc * k);
                        (0..size).contains(&r)
                            && (0..size).contains(&c)
                            && board.get(r as usize, c as usize) == Ok(player.mark())
                    });
                    if all_marked {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn long_lines(size: usize) -> Vec<Line> {
        crate::lines(size)
            .filter(|line| line.len() >= win_length(size))
            .collect()
    }

    quickcheck! {
        fn agrees_with_brute_force(board: RandomBoard, player: Player) -> bool {
            is_win(&board.0, player) == brute_force_win(&board.0, player)
        }
    }

    #[test]
    fn win_length_is_capped() {
        assert_eq!(win_length(3), 3);
        assert_eq!(win_length(4), 4);
        assert_eq!(win_length(5), 5);
        assert_eq!(win_length(6), 5);
        assert_eq!(win_length(7), 5);
    }

    #[test]
    fn empty_board_has_no_winner() {
        for size in 3..=7 {
            let board = Board::new(size).unwrap();
            assert!(!is_win(&board, Player::X));
            assert!(!is_win(&board, Player::O));
            assert_eq!(winner(&board), None);
        }
    }

    #[test]
    fn a_full_line_always_wins() {
        for size in 3..=7 {
            for player in [Player::X, Player::O] {
                for line in long_lines(size) {
                    let mut board = Board::new(size).unwrap();
                    for (row, col) in line.coords() {
                        board.set(row, col, player).unwrap();
                    }
                    assert!(is_win(&board, player), "{:?} on size {}", line, size);
                    assert!(!is_win(&board, player.opponent()));
                    assert_eq!(winner(&board), Some(player));
                }
            }
        }
    }

    #[test]
    fn one_opposing_mark_breaks_a_run() {
        for size in 3..=7 {
            let needed = win_length(size);
            for line in long_lines(size) {
                let run: Vec<(usize, usize)> = line.coords().take(needed).collect();
                for blocked in 0..needed {
                    let mut board = Board::new(size).unwrap();
                    for (k, &(row, col)) in run.iter().enumerate() {
                        let player = if k == blocked { Player::O } else { Player::X };
                        board.set(row, col, player).unwrap();
                    }
                    assert!(!is_win(&board, Player::X), "{:?} blocked at {}", line, blocked);
                }
            }
        }
    }

    #[test]
    fn top_row_wins_exactly_on_the_last_mark() {
        let mut board = board_with(3, &[(0, 0, Player::X), (1, 1, Player::O)]);
        assert!(!is_win(&board, Player::X));
        board.set(0, 1, Player::X).unwrap();
        board.set(2, 0, Player::O).unwrap();
        assert!(!is_win(&board, Player::X));
        board.set(0, 2, Player::X).unwrap();
        assert!(is_win(&board, Player::X));
        assert!(!is_win(&board, Player::O));
    }

    #[test]
    fn small_boards_need_the_whole_line() {
        // Two in a row is not enough on a 3x3 board, nor three on a 4x4 board.
        let board = board_with(3, &[(0, 0, Player::X), (0, 1, Player::X)]);
        assert!(!is_win(&board, Player::X));
        let board = board_with(
            4,
            &[(2, 0, Player::O), (2, 1, Player::O), (2, 2, Player::O)],
        );
        assert!(!is_win(&board, Player::O));
        let board = board_with(
            5,
            &[
                (0, 4, Player::X),
                (1, 3, Player::X),
                (2, 2, Player::X),
                (3, 1, Player::X),
            ],
        );
        assert!(!is_win(&board, Player::X));
    }

    #[test]
    fn five_inside_a_long_diagonal() {
        let marks: Vec<(usize, usize, Player)> = (1..=5).map(|k| (k, k, Player::X)).collect();
        let board = board_with(7, &marks);
        assert!(board.get(0, 0).unwrap().is_empty());
        assert!(board.get(6, 6).unwrap().is_empty());
        assert!(is_win(&board, Player::X));
    }

    #[test]
    fn five_inside_a_long_row_with_mixed_ends() {
        let mut marks = vec![(3, 0, Player::O)];
        marks.extend((1..=5).map(|col| (3, col, Player::X)));
        let board = board_with(6, &marks);
        assert!(is_win(&board, Player::X));

        let marks: Vec<(usize, usize, Player)> = (2..=5).map(|row| (row, 4, Player::O)).collect();
        let board = board_with(7, &marks);
        assert!(!is_win(&board, Player::O));
    }

    #[test]
    fn short_corner_diagonals() {
        // The 5-cell diagonals next to the main ones on a 6x6 board.
        let marks: Vec<(usize, usize, Player)> = (0..5).map(|k| (k, k + 1, Player::O)).collect();
        assert!(is_win(&board_with(6, &marks), Player::O));
        let marks: Vec<(usize, usize, Player)> = (0..5).map(|k| (k + 1, k, Player::O)).collect();
        assert!(is_win(&board_with(6, &marks), Player::O));
        let marks: Vec<(usize, usize, Player)> = (0..5).map(|k| (k, 4 - k, Player::X)).collect();
        assert!(is_win(&board_with(6, &marks), Player::X));
        let marks: Vec<(usize, usize, Player)> = (0..5).map(|k| (k + 1, 5 - k, Player::X)).collect();
        assert!(is_win(&board_with(6, &marks), Player::X));
        // Lines shorter than five never win, even when full.
        let marks: Vec<(usize, usize, Player)> = (0..4).map(|k| (k + 3, k, Player::X)).collect();
        assert!(!is_win(&board_with(7, &marks), Player::X));
    }

    #[test]
    fn full_board_without_a_line_is_a_draw() {
        // X O X
        // X O O
        // O X X
        let board = board_with(
            3,
            &[
                (0, 0, Player::X),
                (0, 1, Player::O),
                (0, 2, Player::X),
                (1, 0, Player::X),
                (1, 1, Player::O),
                (1, 2, Player::O),
                (2, 0, Player::O),
                (2, 1, Player::X),
                (2, 2, Player::X),
            ],
        );
        assert!(is_draw(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn partially_filled_board_is_not_a_draw() {
        let board = board_with(3, &[(1, 1, Player::X)]);
        assert!(!is_draw(&board));
        assert!(!is_draw(&Board::new(7).unwrap()));
    }

    #[test]
    fn orientations_are_all_scanned() {
        let size = 4;
        for orientation in Orientation::ALL {
            let line = orientation
                .lines(size)
                .find(|line| line.len() == size)
                .unwrap();
            let mut board = Board::new(size).unwrap();
            for (row, col) in line.coords() {
                board.set(row, col, Player::O).unwrap();
            }
            assert!(is_win(&board, Player::O), "{:?}", orientation);
        }
    }
}
