use ndarray::Array2;

use crate::*;

/// Returns the line won through `coords`, if the player owning that cell
/// owns every cell of a line containing it.
pub fn winning_line(board: &Array2<Cell>, coords: Coord2) -> Option<Line> {
    let size = board_rows(board);
    let player = board[coords.to_nd_index()].owner()?;

    lines_through(coords, size).find(|line| {
        line.iter_cells(size)
            .all(|pos| board[pos.to_nd_index()].is_owned_by(player))
    })
}

/// Whether every cell of the board is owned.
pub fn is_board_full(board: &Array2<Cell>) -> bool {
    board.iter().all(|cell| !cell.is_empty())
}

pub(crate) fn board_rows(board: &Array2<Cell>) -> Coord {
    board.dim().0.try_into().unwrap()
}
