use warren_core::{Cell, Grid};

/// Cached neighbor computation helper.
///
/// Enumerates the cardinal (4-way) neighbours of a cell in
/// [`Cell::DIRECTIONS`] order, filtered by a predicate, into a reused buffer.
pub struct Neighbors {
    buf: Vec<Cell>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the 4-directional neighbours of `c`, keeping only those for
    /// which `keep` returns `true`.
    pub fn cardinal(&mut self, c: Cell, keep: impl Fn(Cell) -> bool) -> &[Cell] {
        self.buf.clear();
        for n in c.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

/// The expansion test: `c` is in bounds, passable, and not yet closed.
///
/// `closed` is indexed by the grid's row-major cell index.
#[inline]
pub(crate) fn expandable(grid: &Grid, closed: &[bool], c: Cell) -> bool {
    match grid.index(c) {
        Some(i) => grid.is_passable(c) && !closed[i],
        None => false,
    }
}
