/// The direction a [`Line`] runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left to right.
    Row,
    /// Top to bottom.
    Column,
    /// Down-right, `\`. Constant `row - col`.
    Diagonal,
    /// Down-left, `/`. Constant `row + col`.
    AntiDiagonal,
}

/// A straight run of cells across a board, from one edge to the opposite one.
///
/// This only describes coordinates, see
/// [`Board::cells_along()`](crate::Board::cells_along) for the content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    orientation: Orientation,
    start: (usize, usize),
    len: usize,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Row,
        Orientation::Column,
        Orientation::Diagonal,
        Orientation::AntiDiagonal,
    ];

    /// The cell `steps` cells further along this orientation.
    fn advance(self, (row, col): (usize, usize), steps: usize) -> (usize, usize) {
        match self {
            Orientation::Row => (row, col + steps),
            Orientation::Column => (row + steps, col),
            Orientation::Diagonal => (row + steps, col + steps),
            Orientation::AntiDiagonal => (row + steps, col - steps),
        }
    }

    /// The edge cells where lines of this orientation start.
    ///
    /// Every line starts either on the top row or on one side column. For
    /// the diagonal families the corner shared by both edges is taken from
    /// the top row only.
    fn starts(self, size: usize) -> impl Iterator<Item = (usize, usize)> {
        let (top_cols, side_rows, side_col) = match self {
            Orientation::Row => (0..0, 0..size, 0),
            Orientation::Column => (0..size, 0..0, 0),
            Orientation::Diagonal => (0..size, 1..size, 0),
            Orientation::AntiDiagonal => (0..size, 1..size, size.saturating_sub(1)),
        };
        top_cols
            .map(|col| (0, col))
            .chain(side_rows.map(move |row| (row, side_col)))
    }

    /// How many cells there are from `start` to the edge of the board.
    fn run_length(self, (row, col): (usize, usize), size: usize) -> usize {
        match self {
            Orientation::Row => size - col,
            Orientation::Column => size - row,
            Orientation::Diagonal => size - row.max(col),
            Orientation::AntiDiagonal => (size - row).min(col + 1),
        }
    }

    /// All lines of this orientation on a board of the given size.
    pub fn lines(self, size: usize) -> impl Iterator<Item = Line> {
        self.starts(size).map(move |start| Line {
            orientation: self,
            start,
            len: self.run_length(start, size),
        })
    }
}

impl Line {
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The first cell of the line.
    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The `(row, col)` coordinates of the line, in order.
    pub fn coords(self) -> impl Iterator<Item = (usize, usize)> {
        (0..self.len).map(move |steps| self.orientation.advance(self.start, steps))
    }
}

/// Every row, column and diagonal of a board of the given size, including
/// the short diagonals near the corners.
pub fn lines(size: usize) -> impl Iterator<Item = Line> {
    Orientation::ALL
        .into_iter()
        .flat_map(move |orientation| orientation.lines(size))
}
