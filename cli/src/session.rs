use chrono::{DateTime, Utc};
use rand::RngExt;
use triquito_core::{Coord2, GameConfig, MatchEngine, PlaceOutcome, Player, Result};
use triquito_protocol::{InputEvent, MatchUpdate, PlayerId};

/// One play-through of a match plus the presentation-side bookkeeping the
/// engine does not track: display symbols and wall-clock timestamps.
pub struct GameSession {
    engine: MatchEngine,
    pool: Vec<char>,
    symbols: (char, char),
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
}

impl GameSession {
    /// `pool` must hold at least two symbols; the players draw distinct ones.
    pub fn new(rows: u8, pool: &[char]) -> Self {
        Self {
            engine: MatchEngine::new(GameConfig::new(rows)),
            pool: pool.to_vec(),
            symbols: draw_symbols(pool),
            started_at: None,
            ended_at: None,
        }
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn symbol_of(&self, player: Player) -> char {
        self.symbol_by_id(player.id())
    }

    pub fn symbol_by_id(&self, id: PlayerId) -> char {
        if id == Player::Two.id() {
            self.symbols.1
        } else {
            self.symbols.0
        }
    }

    pub fn apply(&mut self, event: InputEvent) -> Result<MatchUpdate> {
        match event {
            InputEvent::CellSelected { row, col } => self.place((row, col)),
            InputEvent::Restart => {
                self.restart();
                Ok(MatchUpdate::Ongoing {
                    next_player: self.engine.to_move().id(),
                })
            }
        }
    }

    fn place(&mut self, coords: Coord2) -> Result<MatchUpdate> {
        let outcome = self.engine.place(coords)?;

        if self.started_at.is_none() {
            self.started_at = Some(Utc::now());
        }
        if outcome.is_terminal() {
            self.ended_at = Some(Utc::now());
        }

        Ok(match outcome {
            PlaceOutcome::Placed => MatchUpdate::Ongoing {
                next_player: self.engine.to_move().id(),
            },
            PlaceOutcome::Won => {
                let player = self.engine.winner().expect("won match has a winner");
                let line = self
                    .engine
                    .winning_line()
                    .expect("won match has a winning line");
                MatchUpdate::Won {
                    player: player.id(),
                    line: line.iter_cells(self.engine.rows()).collect(),
                }
            }
            PlaceOutcome::Drawn => MatchUpdate::Draw,
        })
    }

    /// Resets the engine, re-rolls both symbols, and clears the timestamps.
    pub fn restart(&mut self) {
        self.engine.restart();
        self.symbols = draw_symbols(&self.pool);
        self.started_at = None;
        self.ended_at = None;
    }

    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u32 {
        if let Some(started_at) = self.started_at {
            (self.ended_at.unwrap_or(now) - started_at)
                .num_seconds()
                .max(0) as u32
        } else {
            0
        }
    }
}

fn draw_symbols(pool: &[char]) -> (char, char) {
    let mut rng = rand::rng();
    let first = rng.random_range(0..pool.len());
    // second draw excludes the first index
    let mut second = rng.random_range(0..pool.len() - 1);
    if second >= first {
        second += 1;
    }
    (pool[first], pool[second])
}
