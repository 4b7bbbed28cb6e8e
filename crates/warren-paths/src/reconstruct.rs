//! Parent links and path reconstruction, shared by every search.

use warren_core::{Cell, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Link {
    Unset,
    Root,
    From(Cell),
}

/// Per-search record of which cell each cell was reached from.
///
/// A cell is either unset (never reached), the root (the start cell), or
/// linked to its parent. Storage is a flat array over the grid's cells.
#[derive(Clone, Debug)]
pub struct ParentMap {
    rows: i32,
    cols: i32,
    links: Vec<Link>,
}

impl ParentMap {
    /// Create an empty map sized for `grid`.
    pub fn new(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            links: vec![Link::Unset; grid.len()],
        }
    }

    #[inline]
    fn idx(&self, c: Cell) -> Option<usize> {
        if c.row < 0 || c.row >= self.rows || c.col < 0 || c.col >= self.cols {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Mark `c` as the root of the search tree. Out-of-bounds cells are ignored.
    pub fn set_root(&mut self, c: Cell) {
        if let Some(i) = self.idx(c) {
            self.links[i] = Link::Root;
        }
    }

    /// Record (or overwrite) `parent` as the parent of `c`.
    /// Out-of-bounds cells are ignored.
    pub fn set(&mut self, c: Cell, parent: Cell) {
        if let Some(i) = self.idx(c) {
            self.links[i] = Link::From(parent);
        }
    }

    /// Whether `c` has an entry, either as the root or with a parent.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.idx(c).is_some_and(|i| self.links[i] != Link::Unset)
    }

    /// The parent of `c`, or `None` for the root and for unset cells.
    #[inline]
    pub fn parent(&self, c: Cell) -> Option<Cell> {
        match self.links[self.idx(c)?] {
            Link::From(p) => Some(p),
            Link::Root | Link::Unset => None,
        }
    }
}

/// Walk the parent links back from `goal` to the root and return the cells in
/// root-to-goal order.
///
/// Returns an empty path if `goal` was never reached, or if the links do not
/// lead back to a root.
pub fn reconstruct_path(parents: &ParentMap, goal: Cell) -> Vec<Cell> {
    let mut path = Vec::new();
    if !parents.contains(goal) {
        return path;
    }
    let mut current = goal;
    loop {
        path.push(current);
        match parents.idx(current).map(|i| parents.links[i]) {
            Some(Link::Root) => break,
            Some(Link::From(p)) if path.len() <= parents.links.len() => current = p,
            // Dangling or cyclic links.
            _ => return Vec::new(),
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_back_to_root() {
        let grid = Grid::open(3, 3);
        let mut pm = ParentMap::new(&grid);
        pm.set_root(Cell::new(0, 0));
        pm.set(Cell::new(0, 1), Cell::new(0, 0));
        pm.set(Cell::new(1, 1), Cell::new(0, 1));
        pm.set(Cell::new(2, 1), Cell::new(1, 1));

        assert_eq!(
            reconstruct_path(&pm, Cell::new(2, 1)),
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
                Cell::new(2, 1),
            ]
        );
    }

    #[test]
    fn root_alone_is_single_cell_path() {
        let grid = Grid::open(2, 2);
        let mut pm = ParentMap::new(&grid);
        pm.set_root(Cell::new(1, 1));
        assert_eq!(reconstruct_path(&pm, Cell::new(1, 1)), vec![Cell::new(1, 1)]);
        assert_eq!(pm.parent(Cell::new(1, 1)), None);
        assert!(pm.contains(Cell::new(1, 1)));
    }

    #[test]
    fn unreached_goal_is_empty() {
        let grid = Grid::open(2, 2);
        let mut pm = ParentMap::new(&grid);
        pm.set_root(Cell::ZERO);
        assert!(reconstruct_path(&pm, Cell::new(1, 1)).is_empty());
        assert!(reconstruct_path(&pm, Cell::new(5, 5)).is_empty());
    }

    #[test]
    fn overwrite_replaces_parent() {
        let grid = Grid::open(2, 2);
        let mut pm = ParentMap::new(&grid);
        pm.set_root(Cell::ZERO);
        pm.set(Cell::new(1, 1), Cell::new(0, 1));
        pm.set(Cell::new(1, 1), Cell::new(1, 0));
        pm.set(Cell::new(1, 0), Cell::ZERO);
        assert_eq!(pm.parent(Cell::new(1, 1)), Some(Cell::new(1, 0)));
        assert_eq!(reconstruct_path(&pm, Cell::new(1, 1)).len(), 3);
    }

    #[test]
    fn cyclic_links_yield_empty_path() {
        let grid = Grid::open(1, 2);
        let mut pm = ParentMap::new(&grid);
        pm.set(Cell::new(0, 0), Cell::new(0, 1));
        pm.set(Cell::new(0, 1), Cell::new(0, 0));
        assert!(reconstruct_path(&pm, Cell::new(0, 1)).is_empty());
    }
}
