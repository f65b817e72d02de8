use serde::{Deserialize, Serialize};

/// One of the two players. X and O are also the marks they place.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

/// The content of a single cell of the [board](crate::Board).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    MarkX,
    MarkO,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The cell content after this player has marked it.
    pub fn mark(self) -> Cell {
        match self {
            Player::X => Cell::MarkX,
            Player::O => Cell::MarkO,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player whose mark is in this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::MarkX => Some(Player::X),
            Cell::MarkO => Some(Player::O),
        }
    }

    /// Render this cell as a single character, `_` for an empty cell.
    pub fn symbol(self) -> char {
        self.owner().map_or('_', Player::symbol)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Cell {
        player.mark()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
