use std::collections::VecDeque;

use log::debug;
use warren_core::{Cell, Grid};

use crate::neighbors::{Neighbors, expandable};
use crate::reconstruct::{ParentMap, reconstruct_path};
use crate::search::{EndpointError, Search, validate_endpoints};
use crate::traits::Strategy;

/// Breadth-first search over the occupancy grid.
///
/// Cells are expanded in discovery order. Every step costs 1, so the first
/// time the goal is dequeued it was reached by a path with the fewest steps.
/// A cell's parent is fixed when it is first discovered and never replaced.
pub fn bfs(grid: &Grid, start: Cell, goal: Cell) -> Result<Search, EndpointError> {
    validate_endpoints(grid, start, goal)?;

    let mut parents = ParentMap::new(grid);
    let mut closed = vec![false; grid.len()];
    let mut queue: VecDeque<Cell> = VecDeque::new();
    let mut trace = Vec::new();
    let mut nbuf = Neighbors::new();

    parents.set_root(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        trace.push(current);

        if current == goal {
            let path = reconstruct_path(&parents, goal);
            debug!(
                "bfs: {start} -> {goal}: path of {} cells, {} expanded",
                path.len(),
                trace.len()
            );
            return Ok(Search::found(path, trace));
        }

        let next = nbuf.cardinal(current, |n| {
            expandable(grid, &closed, n) && !parents.contains(n)
        });
        for &n in next {
            parents.set(n, current);
            queue.push_back(n);
        }

        if let Some(ci) = grid.index(current) {
            closed[ci] = true;
        }
    }

    debug!("bfs: {start} -> {goal}: no path, {} expanded", trace.len());
    Ok(Search::exhausted(trace))
}

/// The breadth-first [`Strategy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bfs;

impl Strategy for Bfs {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search(&self, grid: &Grid, start: Cell, goal: Cell) -> Result<Search, EndpointError> {
        bfs(grid, start, goal)
    }
}
