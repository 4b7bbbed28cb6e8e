//! Text overlay of a search: walls, traced cells, the path, and its endpoints.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use warren_core::{Cell, Grid};
use warren_paths::Search;

/// What to draw in one cell. Later layers win: path over trace over floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Wall,
    Floor,
    Traced,
    Path,
    Start,
    Goal,
}

impl Mark {
    /// The character used for this mark.
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => ' ',
            Self::Traced => '.',
            Self::Path => '*',
            Self::Start => 'S',
            Self::Goal => 'G',
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Wall => Color::DarkGrey,
            Self::Floor => Color::Reset,
            Self::Traced => Color::Cyan,
            Self::Path => Color::Green,
            Self::Start => Color::Blue,
            Self::Goal => Color::Red,
        }
    }
}

/// Build the overlay for one search, one `Vec` per grid row.
pub fn overlay(grid: &Grid, search: &Search, start: Cell, goal: Cell) -> Vec<Vec<Mark>> {
    let mut marks: Vec<Vec<Mark>> = (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| {
                    if grid.is_passable(Cell::new(row, col)) {
                        Mark::Floor
                    } else {
                        Mark::Wall
                    }
                })
                .collect()
        })
        .collect();

    let mut put = |c: Cell, m: Mark| {
        if grid.contains(c) {
            marks[c.row as usize][c.col as usize] = m;
        }
    };
    for &c in &search.trace {
        put(c, Mark::Traced);
    }
    for &c in search.path.iter().flatten() {
        put(c, Mark::Path);
    }
    put(start, Mark::Start);
    put(goal, Mark::Goal);
    marks
}

/// Plain-text rendering of [`overlay`], newline-terminated rows.
pub fn render_ascii(grid: &Grid, search: &Search, start: Cell, goal: Cell) -> String {
    let mut out = String::with_capacity(grid.len() + grid.rows().max(0) as usize);
    for row in overlay(grid, search, start, goal) {
        out.extend(row.into_iter().map(Mark::glyph));
        out.push('\n');
    }
    out
}

/// Write the overlay to a terminal with colours.
pub fn render_colored(
    out: &mut impl Write,
    grid: &Grid,
    search: &Search,
    start: Cell,
    goal: Cell,
) -> io::Result<()> {
    for row in overlay(grid, search, start, goal) {
        for m in row {
            queue!(out, SetForegroundColor(m.color()), Print(m.glyph()))?;
        }
        queue!(out, ResetColor, Print('\n'))?;
    }
    out.flush()
}
