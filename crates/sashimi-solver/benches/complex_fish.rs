//! Benchmarks for the complex fish search.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench complex_fish
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sashimi_core::{CandidateGrid, Digit, DigitGrid, Position};
use sashimi_solver::{
    ComplexFishConfig, PatternOverlay, TechniqueGrid,
    technique::{ComplexFish, SearchStats, Technique as _},
};

const PUZZLE: &str = "
    ..3 .2. 6..
    9.. 3.5 ..1
    ..1 8.6 4..
    ..8 1.2 9..
    7.. ... ..8
    ..6 7.8 2..
    ..2 6.9 5..
    8.. 2.3 ..9
    ..5 .1. 3..
";

fn x_wing_grid() -> TechniqueGrid {
    let mut grid = CandidateGrid::new();
    for y in [0, 8] {
        for x in [1, 2, 3, 5, 6, 7, 8] {
            grid.remove_candidate(Position::new(x, y), Digit::D5);
        }
    }
    TechniqueGrid::from(grid)
}

fn cannibal_grid() -> TechniqueGrid {
    let mut grid = CandidateGrid::new();
    for y in [0, 2] {
        for x in [0, 2, 3, 4, 5] {
            grid.remove_candidate(Position::new(x, y), Digit::D5);
        }
    }
    TechniqueGrid::from(grid)
}

fn puzzle_grid() -> TechniqueGrid {
    let grid: DigitGrid = PUZZLE.parse().unwrap();
    TechniqueGrid::from(grid)
}

fn grids() -> [(&'static str, TechniqueGrid); 4] {
    [
        ("x_wing", x_wing_grid()),
        ("cannibal", cannibal_grid()),
        ("puzzle", puzzle_grid()),
        ("empty", TechniqueGrid::new()),
    ]
}

fn bench_collect(c: &mut Criterion) {
    for max_size in [2, 3, 4] {
        let config = ComplexFishConfig::new(max_size).unwrap();
        let technique = ComplexFish::with_config(config);
        for (param, grid) in grids() {
            c.bench_with_input(
                BenchmarkId::new(format!("complex_fish_collect_size{max_size}"), param),
                &grid,
                |b, grid| {
                    b.iter(|| {
                        let mut stats = SearchStats::default();
                        let steps = technique.collect_with_filter(
                            hint::black_box(grid),
                            &PatternOverlay::new(),
                            &mut stats,
                        );
                        hint::black_box((steps, stats))
                    });
                },
            );
        }
    }
}

fn bench_apply(c: &mut Criterion) {
    let technique = ComplexFish::new();
    for (param, grid) in grids() {
        c.bench_with_input(
            BenchmarkId::new("complex_fish_apply", param),
            &grid,
            |b, grid| {
                b.iter_batched_ref(
                    || hint::black_box(grid.clone()),
                    |grid| {
                        let changed = technique.apply(grid).unwrap();
                        hint::black_box(changed)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_pattern_overlay(c: &mut Criterion) {
    for (param, grid) in grids() {
        c.bench_with_input(
            BenchmarkId::new("pattern_overlay", param),
            &grid,
            |b, grid| {
                b.iter(|| {
                    Digit::ALL.map(|digit| PatternOverlay::template_union(hint::black_box(grid), digit))
                });
            },
        );
    }
}

criterion_group!(benches, bench_collect, bench_apply, bench_pattern_overlay);
criterion_main!(benches);
