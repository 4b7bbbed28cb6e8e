//! Shared pieces of the `pathfind` demo: scenarios, options, and the text
//! overlay that stands in for a renderer.
//!
//! Demonstrates: loading a map with start/goal markers, running BFS and A*
//! through the [`Strategy`] trait, and drawing the path over the search trace.

pub mod options;
pub mod render;
pub mod scenario;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use warren_paths::{Astar, Bfs, EndpointError, Search, Strategy};

pub use options::{MapSource, Options, Which};
pub use render::{Mark, overlay, render_ascii, render_colored};
pub use scenario::{MAZE, Scenario, ScenarioError};

/// Build the scenario an [`Options`] asks for.
pub fn load(map: MapSource) -> Result<Scenario, ScenarioError> {
    match map {
        MapSource::Maze => Scenario::maze(),
        MapSource::Random {
            seed,
            rows,
            cols,
            density,
        } => {
            let mut rng = StdRng::seed_from_u64(seed);
            Ok(Scenario::random(&mut rng, rows, cols, density))
        }
    }
}

/// The strategies selected by `which`, in display order.
pub fn strategies(which: Which) -> Vec<Box<dyn Strategy>> {
    match which {
        Which::Bfs => vec![Box::new(Bfs)],
        Which::Astar => vec![Box::new(Astar::new())],
        Which::Both => vec![Box::new(Bfs), Box::new(Astar::new())],
    }
}

/// Run one strategy on a scenario and log a one-line summary.
pub fn run(strategy: &dyn Strategy, sc: &Scenario) -> Result<Search, EndpointError> {
    let res = strategy.search(&sc.grid, sc.start, sc.goal)?;
    match res.cost() {
        Some(cost) => info!(
            "{}: {} -> {}: {cost} steps, {} cells expanded",
            strategy.name(),
            sc.start,
            sc.goal,
            res.expanded()
        ),
        None => info!(
            "{}: {} -> {}: no path, {} cells expanded",
            strategy.name(),
            sc.start,
            sc.goal,
            res.expanded()
        ),
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maze_is_solved_by_both() {
        let sc = load(MapSource::Maze).unwrap();
        let results: Vec<_> = strategies(Which::Both)
            .iter()
            .map(|s| run(s.as_ref(), &sc).unwrap())
            .collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].cost(), Some(36));
        assert_eq!(results[1].cost(), Some(36));
        assert!(results[1].expanded() <= results[0].expanded());
    }

    #[test]
    fn random_source_is_seeded() {
        let map = MapSource::Random {
            seed: 5,
            rows: 6,
            cols: 9,
            density: 0.25,
        };
        assert_eq!(load(map).unwrap(), load(map).unwrap());
        assert_eq!(load(map).unwrap().grid.cols(), 9);
    }

    #[test]
    fn strategy_selection() {
        let names: Vec<_> = strategies(Which::Astar).iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["A*"]);
        assert_eq!(strategies(Which::Both).len(), 2);
    }
}
