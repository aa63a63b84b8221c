//! Lists the complex fish present in a puzzle.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example find_fish -- "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.."
//! ```
//!
//! Search larger fish and merge Siamese fish:
//!
//! ```sh
//! cargo run --example find_fish -- --max-size 4 --siamese "<grid>"
//! ```
//!
//! Set `RUST_LOG=debug` to see per-digit search statistics.

use std::process;

use clap::Parser;
use log::info;
use sashimi_core::DigitGrid;
use sashimi_solver::{
    ComplexFishConfig, PatternOverlay, SolverError, TechniqueGrid,
    technique::{ComplexFish, SearchStats},
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle as 81 cells; `.`, `_` or `0` mark empty cells.
    grid: String,

    /// Largest fish size to search (2-7).
    #[arg(long, value_name = "SIZE", default_value_t = 3)]
    max_size: u8,

    /// Merge fish sharing base houses into Siamese fish.
    #[arg(long)]
    siamese: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let grid: DigitGrid = match args.grid.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Invalid grid: {err}");
            process::exit(2);
        }
    };

    if let Err(err) = run(&grid, &args) {
        eprintln!("Search failed: {err}");
        process::exit(1);
    }
}

fn run(grid: &DigitGrid, args: &Args) -> Result<(), SolverError> {
    let config = ComplexFishConfig::new(args.max_size)?.with_allow_siamese(args.siamese);
    let grid = TechniqueGrid::from_digit_grid(grid);
    grid.check_consistency()?;

    let technique = ComplexFish::with_config(config);
    let mut stats = SearchStats::default();
    let steps = technique.collect_with_filter(&grid, &PatternOverlay::new(), &mut stats);
    info!(
        "searched {} digits, {} anchors, {} base combinations",
        stats.digits_searched, stats.anchors_searched, stats.base_combinations
    );

    for step in &steps {
        let eliminations: Vec<_> = step.eliminations().iter().map(|pos| pos.to_string()).collect();
        println!(
            "{step} on {}: base {}, cover {} => -{} at {}",
            step.digit(),
            houses(step.base()),
            houses(step.cover()),
            step.digit(),
            eliminations.join(" ")
        );
    }
    println!("{} fish found", steps.len());
    Ok(())
}

fn houses(set: sashimi_core::HouseSet) -> String {
    set.iter()
        .map(|house| house.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
