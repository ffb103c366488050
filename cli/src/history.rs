use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use triquito_protocol::{self as protocol, MatchUpdate, PlayerId, SlotCoords};

/// Append-only writer for the turn-history log: one line per move plus a
/// trailing summary line per match.
pub struct HistoryWriter {
    file: File,
}

impl HistoryWriter {
    /// Opens the log at `path`, truncating any previous match.
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("could not create history log {}", path.display()))?;
        Ok(Self { file })
    }

    pub fn record_move(&mut self, player: PlayerId, coords: SlotCoords) -> anyhow::Result<()> {
        writeln!(self.file, "{}", protocol::move_line(player, coords))
            .context("could not append to the history log")
    }

    pub fn record_summary(&mut self, update: &MatchUpdate) -> anyhow::Result<()> {
        let line = match update {
            MatchUpdate::Won { player, .. } => protocol::win_line(*player),
            MatchUpdate::Draw => protocol::DRAW_LINE.to_string(),
            MatchUpdate::Ongoing { .. } => return Ok(()),
        };
        writeln!(self.file, "{line}").context("could not append to the history log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_holds_moves_and_the_summary_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("History.txt");

        let mut writer = HistoryWriter::create(&path).unwrap();
        writer.record_move(1, (0, 0)).unwrap();
        writer.record_move(2, (0, 1)).unwrap();
        writer
            .record_summary(&MatchUpdate::Won {
                player: 1,
                line: vec![(0, 0), (1, 1), (2, 2)],
            })
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Player 1 clicked on slot (0,0)\n\
             Player 2 clicked on slot (0,1)\n\
             Player 1 won the game!\n"
        );
    }

    #[test]
    fn create_truncates_the_previous_match() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("History.txt");

        let mut writer = HistoryWriter::create(&path).unwrap();
        writer.record_move(1, (2, 2)).unwrap();
        drop(writer);

        let mut writer = HistoryWriter::create(&path).unwrap();
        writer.record_summary(&MatchUpdate::Draw).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "The game ended in a draw!\n");
    }
}
