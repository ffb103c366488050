use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MatchState {
    Ready,
    Active,
    Won,
    Drawn,
}

impl MatchState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Drawn)
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::Ready
    }
}

/// A recorded move, immutable once pushed to the history.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub coords: Coord2,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlaceOutcome {
    Placed,
    Won,
    Drawn,
}

impl PlaceOutcome {
    pub const fn is_terminal(self) -> bool {
        match self {
            Self::Placed => false,
            Self::Won => true,
            Self::Drawn => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchEngine {
    config: GameConfig,
    board: Array2<Cell>,
    to_move: Player,
    move_count: Saturating<CellCount>,
    state: MatchState,
    winner: Option<Player>,
    winning_line: Option<Line>,
    history: Vec<MoveRecord>,
}

impl MatchEngine {
    pub fn new(config: GameConfig) -> Self {
        let rows = usize::from(config.rows);
        Self {
            config,
            board: Array2::default([rows, rows]),
            to_move: Player::One,
            move_count: Saturating(0),
            state: Default::default(),
            winner: None,
            winning_line: None,
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn rows(&self) -> Coord {
        self.config.rows
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board[coords.to_nd_index()]
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn move_count(&self) -> CellCount {
        self.move_count.0
    }

    pub fn is_full(&self) -> bool {
        is_board_full(&self.board)
    }

    /// Applies a move for the player whose turn it is.
    ///
    /// Rejected moves leave the match untouched: coordinates outside the
    /// board, a cell that is already owned, or any move after the match
    /// ended.
    pub fn place(&mut self, coords: Coord2) -> Result<PlaceOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        if !self.board[coords.to_nd_index()].is_empty() {
            return Err(GameError::CellOccupied);
        }

        let player = self.to_move;
        self.board[coords.to_nd_index()] = Cell::Owned(player);
        self.history.push(MoveRecord { player, coords });
        self.move_count += 1;
        self.mark_started();
        log::debug!("Player {} took {:?}", player.id(), coords);

        if let Some(line) = winning_line(&self.board, coords) {
            self.end_match(Some(player), Some(line));
            return Ok(PlaceOutcome::Won);
        }

        if self.is_full() {
            self.end_match(None, None);
            return Ok(PlaceOutcome::Drawn);
        }

        self.to_move = player.opponent();
        Ok(PlaceOutcome::Placed)
    }

    /// Resets to the initial state: empty board, cleared history, player one
    /// to move.
    pub fn restart(&mut self) {
        let rows = usize::from(self.config.rows);
        self.board = Array2::default([rows, rows]);
        self.to_move = Player::One;
        self.move_count = Saturating(0);
        self.state = MatchState::Ready;
        self.winner = None;
        self.winning_line = None;
        self.history.clear();
        log::debug!("match restarted");
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let rows = self.rows();
        if coords.0 < rows && coords.1 < rows {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn mark_started(&mut self) {
        if matches!(self.state, MatchState::Ready) {
            self.state = MatchState::Active;
        }
    }

    fn end_match(&mut self, winner: Option<Player>, line: Option<Line>) {
        if self.state.is_finished() {
            return;
        }

        self.state = if winner.is_some() {
            MatchState::Won
        } else {
            MatchState::Drawn
        };
        self.winner = winner;
        self.winning_line = line;
        log::debug!("match ended: {:?}", self.state);
    }
}
