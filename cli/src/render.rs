use triquito_core::Player;
use triquito_protocol::{CellRender, SlotCoords};

use crate::session::GameSession;

/// Render commands for every cell, row-major. Cells of `highlight` carry the
/// highlight flag so the winning line stands out at match end.
pub fn cell_renders(session: &GameSession, highlight: Option<&[SlotCoords]>) -> Vec<CellRender> {
    let engine = session.engine();
    let rows = engine.rows();
    let mut commands = Vec::with_capacity(usize::from(rows) * usize::from(rows));

    for row in 0..rows {
        for col in 0..rows {
            commands.push(CellRender {
                row,
                col,
                owner: engine.cell_at((row, col)).owner().map(Player::id),
                highlight: highlight.is_some_and(|cells| cells.contains(&(row, col))),
            });
        }
    }

    commands
}

/// Renders the board as text, bracketing highlighted cells.
pub fn board(session: &GameSession, highlight: Option<&[SlotCoords]>) -> String {
    let rows = session.engine().rows();
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..rows {
        out.push_str(&format!("{col:^3}"));
    }
    out.push('\n');

    for command in cell_renders(session, highlight) {
        if command.col == 0 {
            out.push_str(&format!("{:>2} ", command.row));
        }

        let symbol = match command.owner {
            None => '.',
            Some(id) => session.symbol_by_id(id),
        };
        if command.highlight {
            out.push('[');
            out.push(symbol);
            out.push(']');
        } else {
            out.push(' ');
            out.push(symbol);
            out.push(' ');
        }

        if command.col == rows - 1 {
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use triquito_protocol::InputEvent;

    fn session() -> GameSession {
        GameSession::new(3, &['X', 'O'])
    }

    #[test]
    fn empty_board_renders_dots_with_axis_labels() {
        let session = session();

        let expected = "    0  1  2 \n 0  .  .  . \n 1  .  .  . \n 2  .  .  . \n";
        assert_eq!(board(&session, None), expected);
    }

    #[test]
    fn highlighted_cells_are_bracketed() {
        let mut session = session();
        session
            .apply(InputEvent::CellSelected { row: 0, col: 0 })
            .unwrap();

        let one = session.symbol_of(Player::One);
        let rendered = board(&session, Some(&[(0, 0)]));

        assert!(rendered.contains(&format!("[{one}]")));
    }

    #[test]
    fn render_commands_carry_ownership_and_highlight() {
        let mut session = session();
        session
            .apply(InputEvent::CellSelected { row: 1, col: 2 })
            .unwrap();

        let commands = cell_renders(&session, Some(&[(1, 2)]));
        let owned = commands
            .iter()
            .find(|command| (command.row, command.col) == (1, 2))
            .unwrap();

        assert_eq!(owned.owner, Some(1));
        assert!(owned.highlight);
        assert_eq!(commands.len(), 9);
        assert_eq!(commands.iter().filter(|command| command.highlight).count(), 1);
    }
}
