//! Search inputs: a grid with a start and a goal.

use std::fmt;

use rand::{Rng, RngExt};
use warren_core::{Cell, Grid, GridError};

/// The built-in 15x15 maze. `S` marks the start, `G` the goal.
pub const MAZE: &str = "\
###############
#S....#.......#
#.###.#.#####.#
#.#...#.#...#.#
#.#.###.#.#.#.#
#.#.....#.#...#
#.#######.###.#
#.......#...#.#
#####.#.###.#.#
#.....#...#.#.#
#.#########.#.#
#.#.......#.#.#
#.#.#####.#.#.#
#...#.......#G#
###############";

/// A grid plus the endpoints to search between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub grid: Grid,
    pub start: Cell,
    pub goal: Cell,
}

impl Scenario {
    /// Parse an ASCII map containing exactly one `S` and one `G`.
    pub fn parse(text: &str) -> Result<Self, ScenarioError> {
        let grid = Grid::parse(text)?;
        let start = find_marker(text, 'S')?;
        let goal = find_marker(text, 'G')?;
        Ok(Self { grid, start, goal })
    }

    /// The built-in maze.
    pub fn maze() -> Result<Self, ScenarioError> {
        Self::parse(MAZE)
    }

    /// A random grid where each cell is a wall with probability `density`.
    ///
    /// The start is the top-left corner and the goal the bottom-right one;
    /// both are kept passable.
    pub fn random(rng: &mut impl Rng, rows: i32, cols: i32, density: f64) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let start = Cell::ZERO;
        let goal = Cell::new(rows - 1, cols - 1);
        let mut walls = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                let c = Cell::new(row, col);
                let roll: f64 = rng.random();
                if roll < density && c != start && c != goal {
                    walls.push(c);
                }
            }
        }
        Self {
            grid: Grid::with_walls(rows, cols, walls),
            start,
            goal,
        }
    }
}

fn find_marker(text: &str, marker: char) -> Result<Cell, ScenarioError> {
    let mut found = None;
    let lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    for (row, line) in lines.enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if ch != marker {
                continue;
            }
            if found.is_some() {
                return Err(ScenarioError::DuplicateMarker(marker));
            }
            found = Some(Cell::new(row as i32, col as i32));
        }
    }
    found.ok_or(ScenarioError::MissingMarker(marker))
}

/// Errors that can occur when loading a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// The map itself is malformed.
    Grid(GridError),
    /// No `S` or no `G` in the map.
    MissingMarker(char),
    /// More than one `S` or `G` in the map.
    DuplicateMarker(char),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "{e}"),
            Self::MissingMarker(m) => write!(f, "scenario: no \u{201c}{m}\u{201d} marker"),
            Self::DuplicateMarker(m) => {
                write!(f, "scenario: more than one \u{201c}{m}\u{201d} marker")
            }
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ScenarioError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
