//! Shortest-path search over static occupancy grids.
//!
//! This crate provides two interchangeable strategies over a
//! [`warren_core::Grid`] with 4-way, unit-cost movement:
//!
//! - **BFS** uninformed breadth-first search ([`bfs`], [`Bfs`])
//! - **A\*** best-first search guided by a [`Heuristic`] ([`astar`],
//!   [`astar_with`], [`Astar`])
//!
//! Both return a [`Search`]: the path (start to goal inclusive, if one
//! exists) together with the trace of every expanded cell in expansion order.
//! All search state lives inside one call; the grid is only borrowed.
//!
//! # Trait hierarchy
//!
//! | Trait | Role |
//! |---|---|
//! | [`Strategy`] | a complete search, selectable at runtime |
//! | [`Heuristic`] | remaining-cost estimate used by A* |

mod astar;
mod bfs;
mod distance;
mod neighbors;
mod reconstruct;
mod search;
mod traits;

pub use astar::{Astar, astar, astar_with};
pub use bfs::{Bfs, bfs};
pub use distance::manhattan;
pub use neighbors::Neighbors;
pub use reconstruct::{ParentMap, reconstruct_path};
pub use search::{Endpoint, EndpointError, Search, validate_endpoints};
pub use traits::{Heuristic, Manhattan, Strategy, Zero};
