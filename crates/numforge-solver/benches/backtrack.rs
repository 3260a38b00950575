//! Benchmarks for the backtracking solver.
//!
//! Measures [`numforge_solver::solve`] on fixed boards so runs stay
//! reproducible:
//!
//! - **`solve_30_clues`**: a well-known moderate 30-clue puzzle.
//! - **`solve_17_clues`**: a known minimal 17-clue puzzle, close to the
//!   worst case for candidate-pruned search.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench backtrack
//! ```

use std::hint;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use numforge_core::Board;

const THIRTY_CLUES: &str =
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
const SEVENTEEN_CLUES: &str =
    "000000010400000000020000000000050407008000300001090000300400200050100000000806000";

fn bench_solve(c: &mut Criterion) {
    for (name, line) in [
        ("solve_30_clues", THIRTY_CLUES),
        ("solve_17_clues", SEVENTEEN_CLUES),
    ] {
        let board: Board = line.parse().unwrap();
        c.bench_function(name, |b| {
            b.iter_batched(
                || hint::black_box(board.clone()),
                |mut board| {
                    assert!(numforge_solver::solve(&mut board));
                    board
                },
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
