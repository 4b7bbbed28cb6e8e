//! An immutable binary occupancy grid.
//!
//! [`Grid`] stores one passable/wall flag per [`Cell`] in row-major order.
//! It is built once (from a binary matrix, an ASCII map, or a builder) and is
//! never mutated afterwards, so any number of searches may borrow it at once.

use std::fmt;
use std::str::FromStr;

use crate::geom::{Cell, CellIter};

/// Matrix value marking a passable cell.
pub const PASSABLE: u8 = 1;
/// Matrix value marking a wall.
pub const WALL: u8 = 0;

/// A rectangular occupancy grid: `true` = passable, `false` = wall.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGrid", into = "RawGrid")
)]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid of walls. Negative dimensions are clamped to zero, and a
    /// grid with no rows or no columns is always 0x0.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::filled(rows, cols, false)
    }

    /// Create a grid where every cell is passable.
    pub fn open(rows: i32, cols: i32) -> Self {
        Self::filled(rows, cols, true)
    }

    fn filled(rows: i32, cols: i32, passable: bool) -> Self {
        let (rows, cols) = if rows <= 0 || cols <= 0 {
            (0, 0)
        } else {
            (rows, cols)
        };
        Self {
            rows,
            cols,
            cells: vec![passable; rows as usize * cols as usize],
        }
    }

    /// Create an open grid with the given cells turned into walls.
    /// Walls outside the grid are ignored.
    pub fn with_walls(rows: i32, cols: i32, walls: impl IntoIterator<Item = Cell>) -> Self {
        let mut g = Self::open(rows, cols);
        for w in walls {
            if let Some(i) = g.index(w) {
                g.cells[i] = false;
            }
        }
        g
    }

    /// Build a grid from a binary matrix (`1` = passable, `0` = wall).
    pub fn from_rows<R: AsRef<[u8]>>(matrix: &[R]) -> Result<Self, GridError> {
        let cols = matrix.first().map_or(0, |r| r.as_ref().len());
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(matrix.len() * cols);
        for (r, row) in matrix.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::InconsistentWidth {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &v) in row.iter().enumerate() {
                let passable = match v {
                    PASSABLE => true,
                    WALL => false,
                    value => {
                        return Err(GridError::InvalidValue {
                            cell: Cell::new(r as i32, c as i32),
                            value,
                        });
                    }
                };
                cells.push(passable);
            }
        }
        Ok(Self {
            rows: matrix.len() as i32,
            cols: cols as i32,
            cells,
        })
    }

    /// Parse an ASCII map.
    ///
    /// `#` and `0` are walls; `.`, `1`, `S` and `G` are passable. Leading and
    /// trailing whitespace on each line is ignored, as are blank lines.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut matrix: Vec<Vec<u8>> = Vec::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let r = matrix.len() as i32;
            let row = line
                .chars()
                .enumerate()
                .map(|(c, ch)| match ch {
                    '#' | '0' => Ok(WALL),
                    '.' | '1' | 'S' | 'G' => Ok(PASSABLE),
                    ch => Err(GridError::InvalidChar {
                        ch,
                        cell: Cell::new(r, c as i32),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            matrix.push(row);
        }
        Self::from_rows(&matrix)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Convert a row-major index back to a cell, or `None` past the end.
    #[inline]
    pub fn cell(&self, idx: usize) -> Option<Cell> {
        if idx >= self.cells.len() {
            return None;
        }
        let cols = self.cols as usize;
        Some(Cell::new((idx / cols) as i32, (idx % cols) as i32))
    }

    /// The value at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Cell) -> Option<bool> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is in bounds and passable.
    #[inline]
    pub fn is_passable(&self, c: Cell) -> bool {
        self.at(c).unwrap_or(false)
    }

    /// In-bounds, passable orthogonal neighbours of `c`, in
    /// [`Cell::DIRECTIONS`] order.
    pub fn passable_neighbors(&self, c: Cell) -> impl Iterator<Item = Cell> + '_ {
        c.neighbors_4().into_iter().filter(|&n| self.is_passable(n))
    }

    /// Number of passable cells.
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|&&p| p).count()
    }

    /// Iterate over `(Cell, passable)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Cell, bool)> + '_ {
        CellIter::new(self.rows, self.cols).zip(self.cells.iter().copied())
    }

    /// The grid as a binary matrix, one `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.cols as usize)
            .map(|row| row.iter().map(|&p| if p { PASSABLE } else { WALL }).collect())
            .collect()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.cols)?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Grid {
    /// Render as an ASCII map (`#` wall, `.` passable), one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (c, passable) in self.iter() {
            f.write_str(if passable { "." } else { "#" })?;
            if c.col == self.cols - 1 {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawGrid {
    cells: Vec<Vec<u8>>,
}

#[cfg(feature = "serde")]
impl From<Grid> for RawGrid {
    fn from(g: Grid) -> Self {
        RawGrid {
            cells: g.to_rows(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        // An empty grid serializes to no rows.
        if raw.cells.is_empty() {
            return Ok(Grid::new(0, 0));
        }
        Grid::from_rows(&raw.cells)
    }
}

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The matrix has no rows or no columns.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A matrix entry other than `0` or `1`.
    InvalidValue { cell: Cell, value: u8 },
    /// A map character with no occupancy meaning.
    InvalidChar { ch: char, cell: Cell },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} columns, expected {expected}"
            ),
            Self::InvalidValue { cell, value } => {
                write!(f, "grid: invalid value {value} at {cell}, expected 0 or 1")
            }
            Self::InvalidChar { ch, cell } => {
                write!(f, "grid: invalid map character \u{201c}{ch}\u{201d} at {cell}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
        #####
        #S..#
        #.#.#
        #..G#
        #####";

    #[test]
    fn new_and_size() {
        let g = Grid::new(3, 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.len(), 12);
        assert_eq!(g.passable_count(), 0);
        assert_eq!(Grid::open(3, 4).passable_count(), 12);
    }

    #[test]
    fn negative_dimensions_clamp() {
        let g = Grid::open(-2, 5);
        assert!(g.is_empty());
        assert!(!g.contains(Cell::ZERO));
    }

    #[test]
    fn from_rows_reads_binary_matrix() {
        let g = Grid::from_rows(&[[1u8, 0, 1], [1, 1, 0]]).unwrap();
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.at(Cell::new(0, 1)), Some(false));
        assert_eq!(g.at(Cell::new(1, 1)), Some(true));
        assert_eq!(g.to_rows(), vec![vec![1, 0, 1], vec![1, 1, 0]]);
    }

    #[test]
    fn from_rows_rejects_bad_input() {
        let empty: [[u8; 0]; 0] = [];
        assert_eq!(Grid::from_rows(&empty), Err(GridError::Empty));
        assert_eq!(
            Grid::from_rows(&[vec![1u8, 1], vec![1]]),
            Err(GridError::InconsistentWidth {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Grid::from_rows(&[[1u8, 2]]),
            Err(GridError::InvalidValue {
                cell: Cell::new(0, 1),
                value: 2
            })
        );
    }

    #[test]
    fn out_of_bounds_is_never_passable() {
        let g = Grid::open(2, 2);
        for c in [
            Cell::new(-1, 0),
            Cell::new(0, -1),
            Cell::new(2, 0),
            Cell::new(0, 2),
        ] {
            assert_eq!(g.at(c), None);
            assert_eq!(g.index(c), None);
            assert!(!g.is_passable(c));
        }
    }

    #[test]
    fn index_round_trips_through_cell() {
        let g = Grid::open(3, 5);
        for c in CellIter::new(3, 5) {
            let i = g.index(c).unwrap();
            assert_eq!(g.cell(i), Some(c));
        }
        assert_eq!(g.cell(15), None);
    }

    #[test]
    fn zero_width_grid_is_empty() {
        for g in [Grid::open(2, 0), Grid::new(0, 7), Grid::open(-1, 3)] {
            assert_eq!((g.rows(), g.cols()), (0, 0));
            assert_eq!(g.len(), 0);
            assert_eq!(g.cell(0), None);
            assert!(!g.contains(Cell::ZERO));
            assert_eq!(g.iter().count(), 0);
        }
        assert_eq!(Grid::open(2, 0), Grid::new(0, 0));
    }

    #[test]
    fn parse_ascii_map() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(g.rows(), 5);
        assert_eq!(g.cols(), 5);
        assert!(g.is_passable(Cell::new(1, 1)));
        assert!(!g.is_passable(Cell::new(2, 2)));
        assert!(g.is_passable(Cell::new(3, 3)));
        assert_eq!(g.passable_count(), 8);
        assert_eq!("10\n01".parse::<Grid>().unwrap().passable_count(), 2);
    }

    #[test]
    fn parse_rejects_unknown_chars() {
        let err = Grid::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidChar {
                ch: 'x',
                cell: Cell::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn passable_neighbors_filter_walls_and_edges() {
        let g = Grid::parse(ROOM).unwrap();
        let n: Vec<_> = g.passable_neighbors(Cell::new(1, 1)).collect();
        assert_eq!(n, vec![Cell::new(1, 2), Cell::new(2, 1)]);
        let corner = Grid::open(2, 2);
        let n: Vec<_> = corner.passable_neighbors(Cell::ZERO).collect();
        assert_eq!(n, vec![Cell::new(0, 1), Cell::new(1, 0)]);
    }

    #[test]
    fn with_walls_ignores_outside_cells() {
        let g = Grid::with_walls(2, 2, [Cell::new(0, 0), Cell::new(9, 9)]);
        assert_eq!(g.passable_count(), 3);
    }

    #[test]
    fn display_matches_parse() {
        let g = Grid::parse(ROOM).unwrap();
        let again = Grid::parse(&g.to_string()).unwrap();
        assert_eq!(g, again);
    }
}
