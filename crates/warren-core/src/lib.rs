//! **warren-core** — the occupancy grid model shared by the *warren* searches.
//!
//! This crate provides the [`Cell`] coordinate type, its fixed orthogonal
//! neighbourhood, and the immutable binary [`Grid`] with bounds and
//! passability checks.

pub mod geom;
pub mod grid;

pub use geom::{Cell, CellIter};
pub use grid::{Grid, GridError, PASSABLE, WALL};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn grid_is_shareable_across_threads() {
        assert_send_sync::<Grid>();
        assert_send_sync::<Cell>();
    }
}
