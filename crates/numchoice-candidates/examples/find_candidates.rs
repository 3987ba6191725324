//! Example printing the candidate digits of sudoku cells.
//!
//! This example shows how to:
//! - Parse a grid from its text form
//! - Configure a `CandidateFinder` with a filled-cell policy
//! - Compute candidates for one cell, or for every empty cell in parallel
//!
//! # Usage
//!
//! Candidates of the cell at row 1, column 3 (both 1-based):
//!
//! ```sh
//! cargo run --example find_candidates -- --row 1 --col 3 \
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//! ```
//!
//! Candidates of every empty cell, reading the grid from stdin:
//!
//! ```sh
//! cargo run --example find_candidates -- --all < puzzle.txt
//! ```
//!
//! Report a filled cell's own digit instead of rejecting it:
//!
//! ```sh
//! cargo run --example find_candidates -- --row 1 --col 1 --filled-cell pass-through < puzzle.txt
//! ```
//!
//! Set `RUST_LOG=debug` to log rejected requests.

use std::{
    io::{self, Read as _},
    process,
};

use clap::{Parser, ValueEnum};
use numchoice_candidates::{CandidateFinder, FilledCellPolicy};
use numchoice_core::{DigitGrid, DigitSet, Position};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilledCell {
    Reject,
    Exclude,
    PassThrough,
}

impl From<FilledCell> for FilledCellPolicy {
    fn from(value: FilledCell) -> Self {
        match value {
            FilledCell::Reject => FilledCellPolicy::Reject,
            FilledCell::Exclude => FilledCellPolicy::Exclude,
            FilledCell::PassThrough => FilledCellPolicy::PassThrough,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid text: 81 cells, `1`-`9` placed, `.`, `_` or `0` empty. Read from stdin if omitted.
    grid: Option<String>,

    /// Row of the target cell (1-9).
    #[arg(long, value_name = "ROW", requires = "col")]
    row: Option<usize>,

    /// Column of the target cell (1-9).
    #[arg(long, value_name = "COL", requires = "row")]
    col: Option<usize>,

    /// Print candidates for every empty cell.
    #[arg(long, conflicts_with_all = ["row", "col"])]
    all: bool,

    /// How to treat a target cell that already holds a digit.
    #[arg(long, value_name = "POLICY", default_value = "reject")]
    filled_cell: FilledCell,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let grid = match read_grid(args.grid.as_deref()) {
        Ok(grid) => grid,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };
    let finder = CandidateFinder::new().with_filled_cell_policy(args.filled_cell.into());
    log::debug!("loaded grid with {} placed digits", grid.filled_count());

    if args.all {
        let positions = grid.empty_positions().collect::<Vec<_>>();
        let results = positions
            .par_iter()
            .map(|&pos| (pos, finder.find_at(&grid, pos)))
            .collect::<Vec<_>>();
        for (pos, result) in results {
            match result {
                Ok(candidates) => print_candidates(pos, candidates),
                Err(err) => eprintln!("{err}"),
            }
        }
        return;
    }

    let (Some(row), Some(col)) = (args.row, args.col) else {
        eprintln!("Either --row and --col, or --all is required.");
        process::exit(1);
    };
    match finder.find(&grid, row, col) {
        Ok(candidates) => println!("{}", format_values(candidates)),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn read_grid(arg: Option<&str>) -> Result<DigitGrid, String> {
    let text = match arg {
        Some(text) => text.to_owned(),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|err| format!("failed to read stdin: {err}"))?;
            text
        }
    };
    text.parse().map_err(|err| format!("invalid grid: {err}"))
}

fn print_candidates(pos: Position, candidates: DigitSet) {
    println!(
        "r{}c{}: {}",
        pos.y() + 1,
        pos.x() + 1,
        format_values(candidates)
    );
}

fn format_values(candidates: DigitSet) -> String {
    candidates
        .iter()
        .map(|digit| digit.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
