use crate::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// The error type for [`Board`](crate::Board) construction and cell access.
///
/// These are precondition violations of the caller: a correctly validated
/// move never produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    InvalidSize { size: usize },
    OutOfBounds { row: usize, col: usize },
    Occupied { row: usize, col: usize },
}

impl std::error::Error for BoardError {}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidSize { size } => write!(
                f,
                "Board size {} is not between {} and {}",
                size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
            ),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside of the board", row, col)
            }
            BoardError::Occupied { row, col } => {
                write!(f, "Cell ({}, {}) already holds a mark", row, col)
            }
        }
    }
}

/// The error type for one move.
///
/// Every variant is recoverable: the round stays in the same state and the
/// same player is asked again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    NotANumber { token: String },
    OutOfRange { index: usize, max: usize },
    /// All digits, but too many of them to be an index at all.
    TooLarge { token: String, max: usize },
    CellOccupied { index: usize },
    RoundFinished,
    Board(BoardError),
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::NotANumber { token } => {
                write!(f, "'{}' is not a positive whole number", token)
            }
            IllegalMove::OutOfRange { index, max } => {
                write!(f, "Move {} is outside of the range 1-{}", index, max)
            }
            IllegalMove::TooLarge { token, max } => {
                write!(f, "Move {} is outside of the range 1-{}", token, max)
            }
            IllegalMove::CellOccupied { index } => write!(f, "Cell {} is already taken", index),
            IllegalMove::RoundFinished => write!(f, "The round is already over"),
            IllegalMove::Board(_) => write!(f, "The board rejected the move"),
        }
    }
}
