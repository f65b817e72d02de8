mod console;
mod prompts;
mod session;
pub use console::*;
pub use prompts::*;
pub use session::*;

use tictactoe::Player;

/// Settings for the first series of a session. Anything left out is asked for.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    pub board_size: Option<usize>,
    pub starting_player: Option<Player>,
}
