//! Search results and endpoint validation.

use std::fmt;

use log::warn;
use warren_core::{Cell, Grid};

/// The outcome of one search: the path, if any, and the expansion trace.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Search {
    /// Start to goal inclusive, or `None` when the goal is unreachable.
    pub path: Option<Vec<Cell>>,
    /// Every expanded cell, in expansion order.
    pub trace: Vec<Cell>,
}

impl Search {
    /// No path and an empty trace.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn found(path: Vec<Cell>, trace: Vec<Cell>) -> Self {
        Self {
            path: Some(path),
            trace,
        }
    }

    pub(crate) fn exhausted(trace: Vec<Cell>) -> Self {
        Self { path: None, trace }
    }

    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of steps (edges) along the path.
    pub fn cost(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }

    /// Number of cells expanded during the search.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.trace.len()
    }

    /// Split into `(path, trace)`.
    pub fn into_parts(self) -> (Option<Vec<Cell>>, Vec<Cell>) {
        (self.path, self.trace)
    }
}

/// Which end of the requested path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Goal => "goal",
        })
    }
}

/// A start or goal cell that cannot be part of any path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointError {
    /// The endpoint is a wall.
    Wall { endpoint: Endpoint, cell: Cell },
    /// The endpoint lies outside the grid.
    OutOfBounds { endpoint: Endpoint, cell: Cell },
}

impl EndpointError {
    /// The offending endpoint.
    pub fn endpoint(&self) -> Endpoint {
        match *self {
            Self::Wall { endpoint, .. } | Self::OutOfBounds { endpoint, .. } => endpoint,
        }
    }

    /// The offending cell.
    pub fn cell(&self) -> Cell {
        match *self {
            Self::Wall { cell, .. } | Self::OutOfBounds { cell, .. } => cell,
        }
    }
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wall { endpoint, cell } => {
                write!(f, "{endpoint} position is a wall: {cell}")
            }
            Self::OutOfBounds { endpoint, cell } => {
                write!(f, "{endpoint} position is out of bounds: {cell}")
            }
        }
    }
}

impl std::error::Error for EndpointError {}

fn check(grid: &Grid, endpoint: Endpoint, cell: Cell) -> Result<usize, EndpointError> {
    let Some(i) = grid.index(cell) else {
        return Err(EndpointError::OutOfBounds { endpoint, cell });
    };
    if !grid.is_passable(cell) {
        return Err(EndpointError::Wall { endpoint, cell });
    }
    Ok(i)
}

/// Check that `start` and `goal` are in bounds and passable, start first.
///
/// Returns their row-major indices. Failures are logged at `warn` level.
pub fn validate_endpoints(
    grid: &Grid,
    start: Cell,
    goal: Cell,
) -> Result<(usize, usize), EndpointError> {
    let checked = check(grid, Endpoint::Start, start)
        .and_then(|si| check(grid, Endpoint::Goal, goal).map(|gi| (si, gi)));
    if let Err(e) = &checked {
        warn!("{e}");
    }
    checked
}
