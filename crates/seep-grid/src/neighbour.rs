//! Bounds-checked 4-connected neighbour lookup.
//!
//! The grid edge is a hard wall: a neighbour off the grid is `None`, never
//! wrapped or clamped. Rule phases use these helpers for every neighbour
//! reference.

use smallvec::SmallVec;

use crate::grid::Grid;

/// A cardinal direction on screen (row 0 is the top).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Towards column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl Direction {
    /// Horizontal directions in evaluation order: left, then right.
    pub const HORIZONTAL: [Direction; 2] = [Direction::Left, Direction::Right];

    /// `(row, col)` offset of one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

impl Grid {
    /// Flat index of the neighbour of `index` in `dir`, or `None` at the edge.
    pub fn neighbour(&self, index: usize, dir: Direction) -> Option<usize> {
        let (r, c) = self.coords_of(index);
        let (dr, dc) = dir.offset();
        self.index_of(r as i32 + dr, c as i32 + dc).ok()
    }

    /// Cell directly above `index`.
    pub fn above(&self, index: usize) -> Option<usize> {
        self.neighbour(index, Direction::Up)
    }

    /// Cell directly below `index`.
    pub fn below(&self, index: usize) -> Option<usize> {
        self.neighbour(index, Direction::Down)
    }

    /// Existing horizontal neighbours of `index`, left before right.
    pub fn horizontal_neighbours(&self, index: usize) -> SmallVec<[(Direction, usize); 2]> {
        Direction::HORIZONTAL
            .iter()
            .filter_map(|&dir| self.neighbour(index, dir).map(|n| (dir, n)))
            .collect()
    }
}
