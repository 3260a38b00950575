//! Example demonstrating random Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a given size and blank count
//! - Generate a random or seeded puzzle
//! - Display the puzzle, solution, and seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Control the number of blanked cells (default: 40):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --blanks 64
//! ```
//!
//! Reproduce a previous puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 42
//! ```

use std::process;

use clap::Parser;
use numforge_generator::PuzzleGenerator;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length; must be a perfect square.
    #[arg(long, value_name = "SIZE", default_value_t = 9)]
    size: usize,

    /// Number of cells to blank out.
    #[arg(long, value_name = "COUNT", default_value_t = 40)]
    blanks: usize,

    /// Seed for reproducible generation; random if omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let generator = match PuzzleGenerator::new(args.size, args.blanks) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let result = match args.seed {
        Some(seed) => generator.generate_seeded(seed),
        None => generator.generate(),
    };
    let puzzle = match result {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem:");
    println!("{}", puzzle.board);
    println!();
    println!("Solution:");
    println!("{}", puzzle.answer);
}
