//! Command-line options for the `pathfind` demo.

use clap::{ArgAction, ArgGroup, Parser};

/// Which strategies to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Which {
    Bfs,
    Astar,
    #[default]
    Both,
}

/// Where the map comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MapSource {
    /// The built-in maze.
    #[default]
    Maze,
    /// A random grid.
    Random {
        seed: u64,
        rows: i32,
        cols: i32,
        density: f64,
    },
}

const DEFAULT_ROWS: i32 = 20;
const DEFAULT_COLS: i32 = 40;

/// Run BFS and/or A* on a grid and print the search overlay.
///
/// Without --seed the built-in maze is searched. --size and --density only
/// apply to random maps.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "pathfind", version, about, long_about = None)]
#[command(group(ArgGroup::new("strategy").args(["bfs", "astar", "both"])))]
pub struct Options {
    /// Run breadth-first search only
    #[arg(long)]
    bfs: bool,

    /// Run A* only
    #[arg(long)]
    astar: bool,

    /// Run both searches (the default)
    #[arg(long)]
    both: bool,

    /// Seed for a random map; the built-in maze is used without it
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Random map size
    #[arg(
        long,
        num_args = 2,
        value_names = ["ROWS", "COLS"],
        value_parser = clap::value_parser!(i32).range(1..),
        default_values_t = [DEFAULT_ROWS, DEFAULT_COLS]
    )]
    pub size: Vec<i32>,

    /// Probability that a random map cell is a wall
    #[arg(long, value_name = "P", default_value_t = 0.3, value_parser = parse_density)]
    pub density: f64,

    /// Print plain ASCII instead of coloured output
    #[arg(long = "no-color", action = ArgAction::SetFalse)]
    pub color: bool,
}

impl Options {
    /// The strategies selected on the command line.
    pub fn which(&self) -> Which {
        if self.bfs {
            Which::Bfs
        } else if self.astar {
            Which::Astar
        } else {
            Which::Both
        }
    }

    /// The map selected on the command line.
    pub fn map(&self) -> MapSource {
        let Some(seed) = self.seed else {
            return MapSource::Maze;
        };
        let (rows, cols) = match self.size[..] {
            [rows, cols] => (rows, cols),
            _ => (DEFAULT_ROWS, DEFAULT_COLS),
        };
        MapSource::Random {
            seed,
            rows,
            cols,
            density: self.density,
        }
    }
}

fn parse_density(s: &str) -> Result<f64, String> {
    let p: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("{p} is not in 0.0..=1.0"))
    }
}
