use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for move counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// A line of cells evaluated for a win.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Line {
    Row(Coord),
    Col(Coord),
    MainDiag,
    AntiDiag,
}

impl Line {
    /// Whether `coords` belongs to this line on a board with `size` rows.
    pub const fn contains(self, (row, col): Coord2, size: Coord) -> bool {
        match self {
            Self::Row(r) => row == r,
            Self::Col(c) => col == c,
            Self::MainDiag => row == col,
            Self::AntiDiag => row as CellCount + col as CellCount == size as CellCount - 1,
        }
    }

    pub const fn iter_cells(self, size: Coord) -> LineIter {
        LineIter {
            line: self,
            size,
            index: 0,
        }
    }
}

#[derive(Debug)]
pub struct LineIter {
    line: Line,
    size: Coord,
    index: Coord,
}

impl Iterator for LineIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.size {
            return None;
        }

        let i = self.index;
        self.index += 1;

        Some(match self.line {
            Line::Row(r) => (r, i),
            Line::Col(c) => (i, c),
            Line::MainDiag => (i, i),
            Line::AntiDiag => (i, self.size - 1 - i),
        })
    }
}

const CANDIDATES: u8 = 4;

/// Iterates the candidate lines through `center`: its row, its column, and
/// whichever diagonals it lies on.
pub fn lines_through(center: Coord2, size: Coord) -> LinesThrough {
    LinesThrough {
        center,
        size,
        index: 0,
    }
}

#[derive(Debug)]
pub struct LinesThrough {
    center: Coord2,
    size: Coord,
    index: u8,
}

impl Iterator for LinesThrough {
    type Item = Line;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.index >= CANDIDATES {
                return None;
            }

            let line = match self.index {
                0 => Line::Row(self.center.0),
                1 => Line::Col(self.center.1),
                2 => Line::MainDiag,
                _ => Line::AntiDiag,
            };
            self.index += 1;

            if line.contains(self.center, self.size) {
                return Some(line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn line_iter_walks_the_anti_diagonal() {
        let cells: Vec<Coord2> = Line::AntiDiag.iter_cells(4).collect();
        assert_eq!(cells, [(0, 3), (1, 2), (2, 1), (3, 0)]);
    }

    #[test]
    fn line_contains_uses_the_generic_diagonal_rules() {
        assert!(Line::MainDiag.contains((2, 2), 4));
        assert!(Line::AntiDiag.contains((1, 2), 4));
        assert!(!Line::AntiDiag.contains((1, 2), 3));
        assert!(Line::Row(1).contains((1, 0), 3));
        assert!(!Line::Col(2).contains((1, 0), 3));
    }

    #[test]
    fn center_of_an_odd_board_lies_on_both_diagonals() {
        let lines: Vec<Line> = lines_through((1, 1), 3).collect();
        assert_eq!(
            lines,
            [Line::Row(1), Line::Col(1), Line::MainDiag, Line::AntiDiag]
        );
    }

    #[test]
    fn corner_and_edge_candidates() {
        let corner: Vec<Line> = lines_through((0, 0), 3).collect();
        assert_eq!(corner, [Line::Row(0), Line::Col(0), Line::MainDiag]);

        let edge: Vec<Line> = lines_through((0, 1), 3).collect();
        assert_eq!(edge, [Line::Row(0), Line::Col(1)]);
    }
}
