//! Benchmarks for Sudoku puzzle generation.
//!
//! Measures [`PuzzleGenerator::generate_seeded`] end to end: diagonal seeding,
//! solver completion, and region-even blank removal.
//!
//! # Benchmarks
//!
//! - **`generate_40_blanks`**: a typical mid-difficulty configuration.
//! - **`generate_64_blanks`**: the maximum blank count a 9x9 board allows,
//!   which leaves only the 17-clue floor.
//!
//! Uses three fixed seeds so runs stay reproducible while still measuring
//! across different puzzles.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use numforge_generator::PuzzleGenerator;

const SEEDS: [u64; 3] = [0xc1d4_4bd6_afaf_8af6, 0xa2b3_c4d5_e6f7_a8b9, 42];

fn bench_generate(c: &mut Criterion) {
    for (name, blanks) in [("generate_40_blanks", 40), ("generate_64_blanks", 64)] {
        let generator = PuzzleGenerator::new(9, blanks).unwrap();
        for (i, seed) in SEEDS.into_iter().enumerate() {
            c.bench_with_input(BenchmarkId::new(name, format!("seed_{i}")), &seed, |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_seeded(seed).unwrap(),
                    BatchSize::SmallInput,
                );
            });
        }
    }
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
