use warren_core::{Cell, Grid};

use crate::distance;
use crate::search::{EndpointError, Search};

/// Estimate of the remaining cost from a cell to the goal.
///
/// A* only returns shortest paths when the estimate never exceeds the true
/// number of steps (admissible). Every implementation in this crate is also
/// consistent, so no cell is expanded twice.
pub trait Heuristic {
    /// Estimated number of orthogonal steps from `from` to `to`.
    fn estimate(&self, from: Cell, to: Cell) -> u32;
}

/// Manhattan distance, exact on an open grid with 4-way movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> u32 {
        distance::manhattan(from, to)
    }
}

/// Always zero. Turns A* into uniform-cost search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _from: Cell, _to: Cell) -> u32 {
        0
    }
}

/// A grid search strategy, interchangeable at runtime.
pub trait Strategy {
    /// Short human-readable name, used in logs and reports.
    fn name(&self) -> &'static str;

    /// Search for a shortest path from `start` to `goal`.
    ///
    /// Returns an error, before any cell is expanded, when either endpoint is
    /// out of bounds or a wall. Otherwise the result holds the path (if any)
    /// and every expanded cell in expansion order.
    fn search(&self, grid: &Grid, start: Cell, goal: Cell) -> Result<Search, EndpointError>;

    /// Like [`search`](Self::search), but an invalid endpoint yields an empty
    /// result (no path, empty trace). The error is still logged.
    fn search_or_empty(&self, grid: &Grid, start: Cell, goal: Cell) -> Search {
        self.search(grid, start, goal).unwrap_or_default()
    }
}
