use crate::{to_move, Board};

/// Renders the marks on the board, one row per line, `_` for empty cells.
pub fn visualize_marks(board: &Board) -> String {
    let mut result = String::new();
    for row in board.rows() {
        for cell in row {
            result += &format!("{:>3}", cell.symbol());
        }
        result += "\n";
    }
    result
}

/// Renders the board with the move index in every empty cell, so that the
/// players can see which number to enter.
pub fn visualize_move_indices(board: &Board) -> String {
    let size = board.size();
    let mut result = String::new();
    for (i, row) in board.rows().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            match cell.owner() {
                Some(player) => result += &format!("{:>3}", player.symbol()),
                None => result += &format!("{:>3}", to_move(i, j, size)),
            }
        }
        result += "\n";
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn empty_board() {
        let board = Board::new(3).unwrap();
        assert_eq!(visualize_marks(&board), "  _  _  _\n  _  _  _\n  _  _  _\n");
        assert_eq!(
            visualize_move_indices(&board),
            "  1  2  3\n  4  5  6\n  7  8  9\n"
        );
    }

    #[test]
    fn marks_replace_indices() {
        let mut board = Board::new(4).unwrap();
        board.set(0, 0, Player::X).unwrap();
        board.set(3, 2, Player::O).unwrap();
        assert_eq!(
            visualize_move_indices(&board),
            "  X  2  3  4\n  5  6  7  8\n  9 10 11 12\n 13 14  O 16\n"
        );
        assert_eq!(board.to_string(), visualize_marks(&board));
        assert!(visualize_marks(&board).ends_with("  _  _  O  _\n"));
    }
}
