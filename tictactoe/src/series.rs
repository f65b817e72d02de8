use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{validate_board_size, BoardError, MoveSource, Player, Round, RoundObserver, RoundOutcome};

/// How many rounds each player has won.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "X")]
    x: u32,
    #[serde(rename = "O")]
    o: u32,
}

/// The result of one round of a [`Series`], as reported to the players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round_number: u32,
    pub starting_player: Player,
    pub outcome: RoundOutcome,
    /// The score including this round.
    pub score: Score,
}

/// Rounds played on the same board size, with a running score.
///
/// The player who starts alternates from round to round, no matter who won.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Series {
    board_size: usize,
    starting_player: Player,
    round_number: u32,
    score: Score,
}

impl Score {
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Decided rounds, i.e. without draws.
    pub fn total(&self) -> u32 {
        self.x + self.o
    }

    fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }
}

impl Series {
    /// Starts a series at round 1 with no wins.
    pub fn new(board_size: usize, starting_player: Player) -> Result<Self, BoardError> {
        let board_size = validate_board_size(board_size)?;
        info!(board_size, %starting_player, "Starting new series");
        Ok(Self {
            board_size,
            starting_player,
            round_number: 1,
            score: Score::default(),
        })
    }

    /// Throws away the round counter and the score and starts over with new
    /// settings.
    ///
    /// On error the current series is kept as it is.
    pub fn start_new_series(
        &mut self,
        board_size: usize,
        starting_player: Player,
    ) -> Result<(), BoardError> {
        *self = Self::new(board_size, starting_player)?;
        Ok(())
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// The player who starts the first round.
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// The number of the next round to be played, starting at 1.
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// How many rounds have been recorded.
    pub fn rounds_played(&self) -> u32 {
        self.round_number - 1
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// The player who starts the next round.
    pub fn next_starting_player(&self) -> Player {
        if self.round_number % 2 == 1 {
            self.starting_player
        } else {
            self.starting_player.opponent()
        }
    }

    /// A fresh round for the next round number.
    pub fn start_round(&self) -> Result<Round, BoardError> {
        Round::new(self.board_size, self.next_starting_player())
    }

    /// Counts a finished round and moves on to the next round number.
    pub fn record(&mut self, outcome: RoundOutcome) -> RoundReport {
        if let RoundOutcome::Win(player) = outcome {
            self.score.record_win(player);
        }
        let report = RoundReport {
            round_number: self.round_number,
            starting_player: self.next_starting_player(),
            outcome,
            score: self.score,
        };
        debug!(round_number = self.round_number, ?outcome, "Recorded round");
        self.round_number += 1;
        report
    }

    /// Plays the next round to the end and records it.
    pub fn play_round<C>(&mut self, collaborator: &mut C) -> anyhow::Result<RoundReport>
    where
        C: MoveSource + RoundObserver + ?Sized,
    {
        let mut round = self.start_round()?;
        let outcome = round.run(collaborator)?;
        Ok(self.record(outcome))
    }
}
