use serde::{Deserialize, Serialize};

use crate::{Board, IllegalMove};

/// A move that passed validation: its 1-based index and the cell it maps to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub index: usize,
    pub row: usize,
    pub col: usize,
}

/// Converts a 1-based move index into `(row, col)` on a board of the given size.
pub fn to_coords(index: usize, size: usize) -> Result<(usize, usize), IllegalMove> {
    let max = size * size;
    if index == 0 || index > max {
        return Err(IllegalMove::OutOfRange { index, max });
    }
    Ok(((index - 1) / size, (index - 1) % size))
}

/// Converts `(row, col)` into the 1-based move index shown to the players.
///
/// This is the inverse of [`to_coords()`] for coordinates on the board.
pub fn to_move(row: usize, col: usize, size: usize) -> usize {
    row * size + col + 1
}

/// Reads a move index from a raw token.
///
/// Surrounding whitespace is ignored. Anything but plain decimal digits,
/// including a sign, is not a number. A number too large to represent is
/// out of range as well, and the error keeps the digits as they were typed.
pub fn parse_move(token: &str, size: usize) -> Result<usize, IllegalMove> {
    let trimmed = token.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IllegalMove::NotANumber {
            token: String::from(trimmed),
        });
    }
    trimmed.parse::<usize>().map_err(|_| IllegalMove::TooLarge {
        token: String::from(trimmed),
        max: size * size,
    })
}

/// Checks a move index against the board.
///
/// The checks run in order: the index has to be on the board, then the cell
/// it maps to has to be empty.
pub fn validate(index: usize, board: &Board) -> Result<Placement, IllegalMove> {
    let (row, col) = to_coords(index, board.size())?;
    if board.is_occupied(row, col).map_err(IllegalMove::Board)? {
        return Err(IllegalMove::CellOccupied { index });
    }
    Ok(Placement { index, row, col })
}

/// Parses and validates a raw token, see [`parse_move()`] and [`validate()`].
pub fn validate_token(token: &str, board: &Board) -> Result<Placement, IllegalMove> {
    let index = parse_move(token, board.size())?;
    validate(index, board)
}
