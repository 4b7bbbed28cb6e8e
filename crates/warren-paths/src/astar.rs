use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;
use warren_core::{Cell, Grid};

use crate::neighbors::{Neighbors, expandable};
use crate::reconstruct::{ParentMap, reconstruct_path};
use crate::search::{EndpointError, Search, validate_endpoints};
use crate::traits::{Heuristic, Manhattan, Strategy};

/// Sentinel g-score for cells with no known path yet.
const UNREACHABLE: u32 = u32::MAX;

/// Open-list entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// smallest `f` first, then the smallest `h`, then the oldest entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NodeRef {
    idx: usize,
    g: u32,
    f: u32,
    h: u32,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search with the default [`Manhattan`] heuristic.
pub fn astar(grid: &Grid, start: Cell, goal: Cell) -> Result<Search, EndpointError> {
    astar_with(grid, start, goal, &Manhattan)
}

/// A* search with a caller-supplied heuristic.
///
/// The open list is a binary heap keyed by (f, h, insertion order); ties on
/// `f` favour the cell that looks closer to the goal, then the one queued
/// first. Improving a queued cell's g-score pushes a fresh entry and the
/// outdated one is skipped when popped. With an admissible, consistent
/// heuristic the returned path is a shortest one and no cell is expanded
/// twice.
pub fn astar_with<H: Heuristic + ?Sized>(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    heuristic: &H,
) -> Result<Search, EndpointError> {
    let (start_idx, goal_idx) = validate_endpoints(grid, start, goal)?;

    let mut g_score = vec![UNREACHABLE; grid.len()];
    let mut closed = vec![false; grid.len()];
    let mut parents = ParentMap::new(grid);
    let mut trace = Vec::new();
    let mut nbuf = Neighbors::new();
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let mut seq: u64 = 0;

    g_score[start_idx] = 0;
    parents.set_root(start);
    let h = heuristic.estimate(start, goal);
    open.push(NodeRef {
        idx: start_idx,
        g: 0,
        f: h,
        h,
        seq,
    });

    while let Some(current) = open.pop() {
        let ci = current.idx;

        // Skip stale entries.
        if closed[ci] || current.g != g_score[ci] {
            continue;
        }

        let Some(cp) = grid.cell(ci) else {
            continue;
        };
        trace.push(cp);

        if ci == goal_idx {
            let path = reconstruct_path(&parents, goal);
            debug!(
                "astar: {start} -> {goal}: path of {} cells, {} expanded",
                path.len(),
                trace.len()
            );
            return Ok(Search::found(path, trace));
        }

        let tentative = current.g + 1;
        for &np in nbuf.cardinal(cp, |n| expandable(grid, &closed, n)) {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if tentative >= g_score[ni] {
                continue;
            }
            g_score[ni] = tentative;
            parents.set(np, cp);
            let h = heuristic.estimate(np, goal);
            seq += 1;
            open.push(NodeRef {
                idx: ni,
                g: tentative,
                f: tentative.saturating_add(h),
                h,
                seq,
            });
        }

        closed[ci] = true;
    }

    debug!("astar: {start} -> {goal}: no path, {} expanded", trace.len());
    Ok(Search::exhausted(trace))
}

/// The A* [`Strategy`], generic over its heuristic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Astar<H = Manhattan> {
    heuristic: H,
}

impl Astar {
    /// A* with the Manhattan heuristic.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: Heuristic> Astar<H> {
    /// A* with the given heuristic.
    pub fn with_heuristic(heuristic: H) -> Self {
        Self { heuristic }
    }

    /// The heuristic in use.
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

impl<H: Heuristic> Strategy for Astar<H> {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search(&self, grid: &Grid, start: Cell, goal: Cell) -> Result<Search, EndpointError> {
        astar_with(grid, start, goal, &self.heuristic)
    }
}
