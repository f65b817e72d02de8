use std::io::{BufRead, Write};

use serde::Serialize;
use tictactoe::{Player, Score, Series};
use tracing::{debug, info};

use crate::{
    parse_board_size, parse_next_step, parse_starting_player, parse_yes_no, Config, Console,
    NextStep,
};

const BANNER: &str = "\
*******************************************
*               Tic-Tac-Toe               *
*******************************************";

/// How one series went.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SeriesSummary {
    pub board_size: usize,
    pub starting_player: Player,
    pub rounds: u32,
    pub score: Score,
}

/// Everything played since the referee was started.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub series_played: usize,
    pub rounds_played: u32,
    pub series: Vec<SeriesSummary>,
}

impl SessionSummary {
    fn add(&mut self, series: &Series) {
        self.series_played += 1;
        self.rounds_played += series.rounds_played();
        self.series.push(SeriesSummary {
            board_size: series.board_size(),
            starting_player: series.starting_player(),
            rounds: series.rounds_played(),
            score: series.score(),
        });
    }
}

/// Plays rounds until the players have had enough.
///
/// The first series uses whatever the config specifies and asks for the
/// rest. Returns an error only when the console fails, e.g. because the
/// input was closed.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
) -> anyhow::Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    console.say(BANNER)?;
    let mut series = start_series(console, config.board_size, config.starting_player)?;

    loop {
        console.say(format_args!(
            "***               ROUND {}               ***",
            series.round_number()
        ))?;
        let report = series.play_round(console)?;
        debug!(round_number = report.round_number, outcome = ?report.outcome, "Round over");
        console.announce(&report)?;

        if !console.ask("Do you want to play again? (yes/no): ", parse_yes_no)? {
            break;
        }
        let menu = format!(
            "Start a new game or continue with the current settings?\n  1. Start a new game\n  2. Play round {} with the current settings\n> ",
            series.round_number()
        );
        match console.ask(&menu, parse_next_step)? {
            NextStep::NewSeries => {
                summary.add(&series);
                console.say(BANNER)?;
                series = start_series(console, None, None)?;
            }
            NextStep::NextRound => {}
        }
    }

    summary.add(&series);
    info!(
        series = summary.series_played,
        rounds = summary.rounds_played,
        "Session over"
    );
    console.say("Thanks for playing!")?;
    Ok(summary)
}

fn start_series<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    board_size: Option<usize>,
    starting_player: Option<Player>,
) -> anyhow::Result<Series> {
    let board_size = match board_size {
        Some(size) => size,
        None => console.ask("Enter the board size (3-7): ", parse_board_size)?,
    };
    console.say(format_args!("Board size set to {}", board_size))?;
    let starting_player = match starting_player {
        Some(player) => player,
        None => console.ask(
            "Choose who moves first (1 - X, 2 - O): ",
            parse_starting_player,
        )?,
    };
    Ok(Series::new(board_size, starting_player)?)
}
