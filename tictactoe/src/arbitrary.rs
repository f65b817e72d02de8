use quickcheck::{Arbitrary, Gen};

use crate::{Board, Player, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// A valid board size.
#[derive(Clone, Copy, Debug)]
pub struct BoardSize(pub usize);

/// A cell that lies on a board of the given size.
#[derive(Clone, Copy, Debug)]
pub struct CellOnBoard {
    pub size: usize,
    pub row: usize,
    pub col: usize,
}

/// A board where every cell is independently empty, X or O.
///
/// This is not necessarily reachable through alternating play, which is fine
/// for checking the rules themselves.
#[derive(Clone, Debug)]
pub struct RandomBoard(pub Board);

impl Arbitrary for BoardSize {
    fn arbitrary(g: &mut Gen) -> Self {
        let sizes: Vec<usize> = (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).collect();
        BoardSize(*g.choose(&sizes).unwrap())
    }
}

impl Arbitrary for CellOnBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let size = BoardSize::arbitrary(g).0;
        CellOnBoard {
            size,
            row: usize::arbitrary(g) % size,
            col: usize::arbitrary(g) % size,
        }
    }
}

impl Arbitrary for Player {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Player::X, Player::O]).unwrap()
    }
}

impl Arbitrary for RandomBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let size = BoardSize::arbitrary(g).0;
        let mut board = Board::new(size).unwrap();
        for row in 0..size {
            for col in 0..size {
                // Bias towards marks so that long runs actually show up
                match u8::arbitrary(g) % 5 {
                    0 => {}
                    1 | 2 => board.set(row, col, Player::X).unwrap(),
                    _ => board.set(row, col, Player::O).unwrap(),
                }
            }
        }
        RandomBoard(board)
    }
}
