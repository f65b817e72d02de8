use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{is_draw, is_win, validate, validate_token, Board, BoardError, IllegalMove, Placement, Player};

/// How a round ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Win(Player),
    Draw,
}

/// Where a [`Round`] is in its turn cycle.
///
/// Applying and evaluating a move happens inside [`Round::play()`], so from
/// the outside a round is always either waiting or finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundState {
    AwaitingMove(Player),
    Finished(RoundOutcome),
}

/// Supplies the raw move tokens.
pub trait MoveSource {
    /// Asks `player` for their next move.
    ///
    /// Returning an error means the source itself failed (e.g. the input was
    /// closed), and aborts the round. An invalid token is not an error here,
    /// the round rejects it and asks again.
    fn request_move(&mut self, player: Player, board: &Board) -> anyhow::Result<String>;
}

/// Gets told what happens during a round, e.g. to render it.
pub trait RoundObserver {
    fn round_started(&mut self, _starting_player: Player, _board: &Board) -> anyhow::Result<()> {
        Ok(())
    }

    fn move_rejected(&mut self, _player: Player, _err: &IllegalMove) -> anyhow::Result<()> {
        Ok(())
    }

    fn move_applied(
        &mut self,
        _player: Player,
        _placement: Placement,
        _board: &Board,
    ) -> anyhow::Result<()> {
        Ok(())
    }
}

impl RoundObserver for () {}

/// A source and an observer that are separate values.
impl<S: MoveSource, O> MoveSource for (S, O) {
    fn request_move(&mut self, player: Player, board: &Board) -> anyhow::Result<String> {
        self.0.request_move(player, board)
    }
}

impl<S, O: RoundObserver> RoundObserver for (S, O) {
    fn round_started(&mut self, starting_player: Player, board: &Board) -> anyhow::Result<()> {
        self.1.round_started(starting_player, board)
    }

    fn move_rejected(&mut self, player: Player, err: &IllegalMove) -> anyhow::Result<()> {
        self.1.move_rejected(player, err)
    }

    fn move_applied(
        &mut self,
        player: Player,
        placement: Placement,
        board: &Board,
    ) -> anyhow::Result<()> {
        self.1.move_applied(player, placement, board)
    }
}

/// A single round, from the empty board to a win or a draw.
#[derive(Clone, Debug)]
pub struct Round {
    board: Board,
    starting_player: Player,
    state: RoundState,
    history: Vec<Placement>,
}

impl Round {
    pub fn new(size: usize, starting_player: Player) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
            starting_player,
            state: RoundState::AwaitingMove(starting_player),
            history: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// The player to move, or `None` once the round is over.
    pub fn current_player(&self) -> Option<Player> {
        match self.state {
            RoundState::AwaitingMove(player) => Some(player),
            RoundState::Finished(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.state {
            RoundState::Finished(outcome) => Some(outcome),
            RoundState::AwaitingMove(_) => None,
        }
    }

    /// The moves played so far, in order. Players alternate, starting with
    /// [`Self::starting_player()`].
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Plays a raw move token for the current player.
    ///
    /// On error nothing changes and the same player is still to move.
    pub fn play(&mut self, token: &str) -> Result<RoundState, IllegalMove> {
        let player = self.awaiting_player()?;
        let placement = validate_token(token, &self.board)?;
        self.apply(player, placement)?;
        Ok(self.state)
    }

    /// Like [`Self::play()`], for a move index that is already a number.
    pub fn play_index(&mut self, index: usize) -> Result<RoundState, IllegalMove> {
        let player = self.awaiting_player()?;
        let placement = validate(index, &self.board)?;
        self.apply(player, placement)?;
        Ok(self.state)
    }

    /// Plays the round to the end, asking the collaborator for moves.
    ///
    /// Rejected moves are reported to the observer and asked for again.
    pub fn run<C>(&mut self, collaborator: &mut C) -> anyhow::Result<RoundOutcome>
    where
        C: MoveSource + RoundObserver + ?Sized,
    {
        if let RoundState::AwaitingMove(player) = self.state {
            collaborator.round_started(player, &self.board)?;
        }
        loop {
            let player = match self.state {
                RoundState::AwaitingMove(player) => player,
                RoundState::Finished(outcome) => return Ok(outcome),
            };
            let token = collaborator.request_move(player, &self.board)?;
            trace!(%player, token = %token, "Received move");
            let applied = validate_token(&token, &self.board)
                .and_then(|placement| self.apply(player, placement));
            match applied {
                Ok(placement) => collaborator.move_applied(player, placement, &self.board)?,
                Err(err) => {
                    debug!(%player, %err, "Rejected move");
                    collaborator.move_rejected(player, &err)?;
                }
            }
        }
    }

    fn awaiting_player(&self) -> Result<Player, IllegalMove> {
        self.current_player().ok_or(IllegalMove::RoundFinished)
    }

    fn apply(&mut self, player: Player, placement: Placement) -> Result<Placement, IllegalMove> {
        self.board
            .set(placement.row, placement.col, player)
            .map_err(IllegalMove::Board)?;
        self.history.push(placement);
        debug!(%player, index = placement.index, "Applied move");

        // A winning move that fills the board is still a win.
        self.state = if is_win(&self.board, player) {
            RoundState::Finished(RoundOutcome::Win(player))
        } else if is_draw(&self.board) {
            RoundState::Finished(RoundOutcome::Draw)
        } else {
            RoundState::AwaitingMove(player.opponent())
        };
        if let RoundState::Finished(outcome) = self.state {
            debug!(?outcome, moves = self.history.len(), "Round finished");
        }
        Ok(placement)
    }
}
