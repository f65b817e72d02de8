mod lines;

pub use lines::*;

use crate::{BoardError, Cell, Player};

pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 7;

/// Checks that a square board with this side length can be played on.
pub fn validate_board_size(size: usize) -> Result<usize, BoardError> {
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(BoardError::InvalidSize { size })
    }
}

/// A square grid of cells.
///
/// Cells are stored in row-major order, addressed by 0-based `(row, col)`.
/// A cell can only go from [`Cell::Empty`] to a player's mark, once. To get
/// an empty board again, create a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let size = validate_board_size(size)?;
        Ok(Self {
            size,
            cells: vec![Cell::default(); size * size],
        })
    }

    /// The side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Places the player's mark into an empty cell.
    pub fn set(&mut self, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        let idx = self.index(row, col)?;
        if !self.cells[idx].is_empty() {
            return Err(BoardError::Occupied { row, col });
        }
        self.cells[idx] = player.mark();
        Ok(())
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        self.get(row, col).map(|cell| !cell.is_empty())
    }

    /// How many cells are still empty.
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// The rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    /// All lines of this board, see [`lines()`].
    pub fn lines(&self) -> impl Iterator<Item = Line> {
        lines(self.size)
    }

    /// The cells along a line, in order.
    ///
    /// The line has to be one of this board's [`lines()`](Self::lines). In
    /// debug builds, a line that leaves the board panics.
    pub fn cells_along(&self, line: Line) -> impl Iterator<Item = Cell> + '_ {
        debug_assert!(
            line.coords()
                .all(|(row, col)| row < self.size && col < self.size),
            "{:?} does not fit on a board of size {}",
            line,
            self.size
        );
        line.coords()
            .filter_map(move |(row, col)| self.get(row, col).ok())
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row < self.size && col < self.size {
            Ok(row * self.size + col)
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::visualize_marks(self))
    }
}
