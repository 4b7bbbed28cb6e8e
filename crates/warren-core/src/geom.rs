//! Grid coordinates: the [`Cell`] type and its cardinal neighbourhood.

use std::fmt;
use std::ops::{Add, Sub};

/// A grid coordinate. Row grows down, column grows right.
///
/// Cells are plain values: two cells with equal coordinates are the same
/// cell. Ordering is row-major.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// The four orthogonal offsets, in expansion order: right, left, down, up.
    pub const DIRECTIONS: [Cell; 4] = [
        Cell::new(0, 1),
        Cell::new(0, -1),
        Cell::new(1, 0),
        Cell::new(-1, 0),
    ];

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours, in [`DIRECTIONS`](Self::DIRECTIONS)
    /// order. Some of them may lie outside any given grid.
    #[inline]
    pub fn neighbors_4(self) -> [Cell; 4] {
        Self::DIRECTIONS.map(|d| self + d)
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        matches!(
            (self.row.abs_diff(other.row), self.col.abs_diff(other.col)),
            (0, 1) | (1, 0)
        )
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (i32, i32) {
    #[inline]
    fn from(c: Cell) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

/// Row-major iterator over every cell of a `rows` x `cols` rectangle.
#[derive(Clone, Debug)]
pub struct CellIter {
    rows: i32,
    cols: i32,
    cur: Cell,
}

impl CellIter {
    pub(crate) fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            cur: Cell::ZERO,
        }
    }

    fn is_empty(&self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }
}

impl Iterator for CellIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.is_empty() || self.cur.row >= self.rows {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_empty() || self.cur.row >= self.rows {
            return (0, Some(0));
        }
        let remaining_in_row = (self.cols - self.cur.col) as usize;
        let remaining_rows = (self.rows - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * self.cols as usize;
        (total, Some(total))
    }
}

impl ExactSizeIterator for CellIter {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let c = Cell::new(4, 7);
        let json = serde_json::to_string(&c).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
