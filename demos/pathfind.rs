//! Run BFS and/or A* on a maze and print the search overlay.
//!
//! Run: cargo run --bin pathfind -- --both
//!      cargo run --bin pathfind -- --seed 7 --size 20 60 --density 0.35
//! Set RUST_LOG=debug to see per-search summaries from the library.

use std::io;

use clap::Parser;
use warren_demos::{Options, load, render_ascii, render_colored, run, strategies};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Options::parse();

    let sc = load(opts.map())?;
    let mut stdout = io::stdout();

    for strategy in strategies(opts.which()) {
        println!("== {}", strategy.name());
        let res = match run(strategy.as_ref(), &sc) {
            Ok(res) => res,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };
        if opts.color {
            render_colored(&mut stdout, &sc.grid, &res, sc.start, sc.goal)?;
        } else {
            print!("{}", render_ascii(&sc.grid, &res, sc.start, sc.goal));
        }
        println!();
    }
    Ok(())
}
