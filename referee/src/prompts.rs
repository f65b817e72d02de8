use tictactoe::{validate_board_size, Player, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// What to do after a round when the players want to keep going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextStep {
    /// Pick a new board size and starting player, and reset the score.
    NewSeries,
    /// Play the next round of the current series.
    NextRound,
}

/// The error type for menu answers. The message tells the player what to
/// enter instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidChoice {
    NotANumber,
    BoardSizeOutOfRange,
    UnknownPlayer,
    UnknownAnswer,
    UnknownMenuEntry,
}

impl std::error::Error for InvalidChoice {}

impl std::fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidChoice::NotANumber => write!(f, "Please enter a positive whole number"),
            InvalidChoice::BoardSizeOutOfRange => write!(
                f,
                "The board size must be between {} and {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE
            ),
            InvalidChoice::UnknownPlayer => write!(f, "Please enter 1 for X or 2 for O"),
            InvalidChoice::UnknownAnswer => write!(f, "Please answer yes or no"),
            InvalidChoice::UnknownMenuEntry => write!(f, "Please enter 1 or 2"),
        }
    }
}

pub fn parse_board_size(token: &str) -> Result<usize, InvalidChoice> {
    let token = token.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidChoice::NotANumber);
    }
    token
        .parse::<usize>()
        .ok()
        .and_then(|size| validate_board_size(size).ok())
        .ok_or(InvalidChoice::BoardSizeOutOfRange)
}

/// `1` or `x` for X, `2` or `o` for O.
pub fn parse_starting_player(token: &str) -> Result<Player, InvalidChoice> {
    match token.trim().to_lowercase().as_str() {
        "1" | "x" => Ok(Player::X),
        "2" | "o" => Ok(Player::O),
        _ => Err(InvalidChoice::UnknownPlayer),
    }
}

pub fn parse_yes_no(token: &str) -> Result<bool, InvalidChoice> {
    match token.trim().to_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        _ => Err(InvalidChoice::UnknownAnswer),
    }
}

pub fn parse_next_step(token: &str) -> Result<NextStep, InvalidChoice> {
    match token.trim() {
        "1" => Ok(NextStep::NewSeries),
        "2" => Ok(NextStep::NextRound),
        _ => Err(InvalidChoice::UnknownMenuEntry),
    }
}
