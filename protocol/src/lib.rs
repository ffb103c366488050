//! Wire types exchanged between the match engine and a presentation layer,
//! plus the turn-history text format.

use serde::{Deserialize, Serialize};

/// Numeric player identity as shown to players (1 or 2).
pub type PlayerId = u8;

/// Board coordinates `(row, col)`.
pub type SlotCoords = (u8, u8);

/// Input events a presentation layer delivers to the match.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    CellSelected { row: u8, col: u8 },
    Restart,
}

/// Outcome notification after a move was applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "update", rename_all = "snake_case")]
pub enum MatchUpdate {
    Ongoing { next_player: PlayerId },
    Won { player: PlayerId, line: Vec<SlotCoords> },
    Draw,
}

impl MatchUpdate {
    pub const fn is_terminal(&self) -> bool {
        match self {
            Self::Ongoing { .. } => false,
            Self::Won { .. } => true,
            Self::Draw => true,
        }
    }
}

/// Render command for a single cell. `highlight` marks cells of the winning
/// line at match end.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellRender {
    pub row: u8,
    pub col: u8,
    pub owner: Option<PlayerId>,
    pub highlight: bool,
}

/// Turn-history line for a played slot.
pub fn move_line(player: PlayerId, (row, col): SlotCoords) -> String {
    format!("Player {player} clicked on slot ({row},{col})")
}

/// Trailing summary line for a won match.
pub fn win_line(player: PlayerId) -> String {
    format!("Player {player} won the game!")
}

/// Trailing summary line for a drawn match.
pub const DRAW_LINE: &str = "The game ended in a draw!";
