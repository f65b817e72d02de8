use std::io::{BufRead, Write};

use tictactoe::{
    visualize_marks, visualize_move_indices, Board, IllegalMove, MoveSource, Placement, Player,
    RoundObserver, RoundOutcome, RoundReport,
};
use tracing::trace;

use crate::InvalidChoice;

/// Talks to the players through a line-based reader and a writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    // A re-usable buffer for reading lines.
    // Should always be empty before and after read_until().
    buf: Vec<u8>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: Vec::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes a line of text.
    pub fn say(&mut self, text: impl std::fmt::Display) -> anyhow::Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Asks until `parse` accepts the answer.
    pub fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InvalidChoice>,
    ) -> anyhow::Result<T> {
        loop {
            let line = self.prompt(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    /// Prints the round result and the score of the series.
    pub fn announce(&mut self, report: &RoundReport) -> anyhow::Result<()> {
        match report.outcome {
            RoundOutcome::Win(player) => writeln!(self.output, "Player {} wins!", player)?,
            RoundOutcome::Draw => writeln!(self.output, "It's a draw!")?,
        }
        for player in [Player::X, Player::O] {
            writeln!(
                self.output,
                "Wins for player {}: {}",
                player,
                report.score.wins(player)
            )?;
        }
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let num_bytes_read = self.input.read_until(b'\n', &mut self.buf)?;
        if num_bytes_read == 0 {
            anyhow::bail!("Input was closed while waiting for an answer");
        }
        // Bytes that are not UTF-8 become replacement characters.
        let line = String::from_utf8_lossy(&self.buf)
            .trim_end_matches(&['\r', '\n'][..])
            .to_owned();
        self.buf.clear();
        trace!(line = %line, "Read line");
        Ok(line)
    }

    fn render(&mut self, board: &Board) -> anyhow::Result<()> {
        writeln!(self.output, "{}", visualize_marks(board))?;
        writeln!(self.output, "{}", visualize_move_indices(board))?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> MoveSource for Console<R, W> {
    fn request_move(&mut self, player: Player, _board: &Board) -> anyhow::Result<String> {
        self.prompt(&format!(
            "Player {}, enter your move (a number on the board): ",
            player
        ))
    }
}

impl<R: BufRead, W: Write> RoundObserver for Console<R, W> {
    fn round_started(&mut self, starting_player: Player, board: &Board) -> anyhow::Result<()> {
        self.render(board)?;
        writeln!(self.output, "Player {} starts.", starting_player)?;
        Ok(())
    }

    fn move_rejected(&mut self, _player: Player, err: &IllegalMove) -> anyhow::Result<()> {
        writeln!(self.output, "{}, please try again.", err)?;
        Ok(())
    }

    fn move_applied(
        &mut self,
        _player: Player,
        _placement: Placement,
        board: &Board,
    ) -> anyhow::Result<()> {
        self.render(board)
    }
}
