//! Random Sudoku puzzle generation for the numforge engine.
//!
//! [`PuzzleGenerator`] produces a fully solved random board and then removes a
//! configured number of cells, evenly distributed across the boxes, while
//! keeping the puzzle solvable. The solved board is retained as the answer key
//! so an interactive session can validate player input.
//!
//! Generation is seedable: [`PuzzleGenerator::generate_seeded`] is fully
//! deterministic for a given seed, which keeps tests and benchmarks
//! reproducible.
//!
//! # Examples
//!
//! ```
//! use numforge_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new(9, 40)?;
//! let puzzle = generator.generate_seeded(42)?;
//!
//! assert_eq!(puzzle.board.filled_count(), 41);
//! assert_eq!(puzzle.blank_positions.len(), 40);
//! assert!(puzzle.answer.is_complete());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use derive_more::{Display, Error};
use log::debug;
use numforge_core::{Board, Position, ValueSet};
use numforge_solver::MIN_CLUES;
use rand::{Rng as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;

/// How many diagonal seedings to try before giving up.
///
/// A random diagonal seeding is solvable with very high probability, so a
/// retry is rare and exhausting the cap is practically unreachable; the cap
/// only guards the loop against a pathological seeding model.
const MAX_SEED_ATTEMPTS: usize = 64;

/// Error returned by [`PuzzleGenerator::new`] for invalid configuration.
#[derive(Debug, Display, Error, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    /// The grid side length is not a perfect square.
    #[display("grid size {size} is not a perfect square")]
    SizeNotPerfectSquare {
        /// The rejected side length.
        size: usize,
    },
    /// The blank count would leave fewer clues than a solvable puzzle needs.
    #[display("blank count {blanks_count} is outside the solvable range for a {size}x{size} grid")]
    BlanksOutOfRange {
        /// The rejected blank count.
        blanks_count: usize,
        /// Side length of the configured grid.
        size: usize,
    },
}

/// Error returned by generation when no solvable seeding was found within the
/// retry cap.
#[derive(Debug, Display, Error, PartialEq, Eq, Clone, Copy)]
#[display("no solvable board found after {attempts} diagonal seedings")]
pub struct GenerateError {
    /// Number of seedings attempted.
    pub attempts: usize,
}

/// A generated puzzle, its answer key, and the cells that were blanked.
///
/// The answer is the fully solved board prior to blanking; it is retained for
/// the lifetime of a game session to validate user-entered values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// The playable board, with `blank_positions` cleared to `0`.
    pub board: Board,
    /// The fully solved board the puzzle was cut from.
    pub answer: Board,
    /// The cells cleared by the generator, in region row-major order.
    pub blank_positions: Vec<Position>,
    /// The RNG seed that produced this puzzle.
    pub seed: u64,
}

/// Generates random solvable Sudoku puzzles of a fixed size and blank count.
///
/// Generation works in three phases: every diagonal box is filled with an
/// independent random permutation (diagonal boxes never share a row or
/// column, so no conflicts arise), the solver completes the remaining cells,
/// and the configured number of blanks is removed evenly across the boxes.
///
/// # Examples
///
/// ```
/// use numforge_generator::{ConfigError, PuzzleGenerator};
///
/// // 9x9 with 40 blanks
/// let generator = PuzzleGenerator::new(9, 40)?;
/// assert_eq!(generator.size(), 9);
///
/// // size must be a perfect square
/// assert_eq!(
///     PuzzleGenerator::new(8, 10).unwrap_err(),
///     ConfigError::SizeNotPerfectSquare { size: 8 },
/// );
/// # Ok::<(), ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    size: usize,
    box_size: usize,
    blanks_count: usize,
}

impl PuzzleGenerator {
    /// Creates a generator for `size`x`size` puzzles with `blanks_count`
    /// blanked cells.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SizeNotPerfectSquare`] if `size` has no integer
    /// square root, and [`ConfigError::BlanksOutOfRange`] if `blanks_count`
    /// exceeds `size * size - 17`, the most a puzzle can lose while still
    /// meeting the solver's clue floor. Grids with fewer than 17 cells have
    /// no valid blank count at all.
    pub fn new(size: usize, blanks_count: usize) -> Result<Self, ConfigError> {
        let box_size = size.isqrt();
        if box_size * box_size != size || box_size == 0 {
            return Err(ConfigError::SizeNotPerfectSquare { size });
        }
        let max_blanks = (size * size)
            .checked_sub(MIN_CLUES)
            .ok_or(ConfigError::BlanksOutOfRange { blanks_count, size })?;
        if blanks_count > max_blanks {
            return Err(ConfigError::BlanksOutOfRange { blanks_count, size });
        }
        Ok(Self {
            size,
            box_size,
            blanks_count,
        })
    }

    /// Returns the configured board side length.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the configured number of blanked cells.
    #[must_use]
    pub const fn blanks_count(&self) -> usize {
        self.blanks_count
    }

    /// Generates a puzzle from an entropy-derived seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if no solvable diagonal seeding was found
    /// within the retry cap; with this seeding scheme that is practically
    /// unreachable.
    pub fn generate(&self) -> Result<Puzzle, GenerateError> {
        self.generate_seeded(rand::rng().random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same generator configuration and seed always produce the same
    /// puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if no solvable diagonal seeding was found
    /// within the retry cap.
    pub fn generate_seeded(&self, seed: u64) -> Result<Puzzle, GenerateError> {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);

        for attempt in 0..MAX_SEED_ATTEMPTS {
            let mut answer = Board::empty(self.box_size);
            self.fill_diagonal_boxes(&mut answer, &mut rng);

            if !numforge_solver::solve(&mut answer) {
                debug!("diagonal seeding {attempt} was unsolvable, reseeding");
                continue;
            }

            let (board, blank_positions) = self.remove_blanks(&answer, &mut rng);
            return Ok(Puzzle {
                board,
                answer,
                blank_positions,
                seed,
            });
        }

        Err(GenerateError {
            attempts: MAX_SEED_ATTEMPTS,
        })
    }

    /// Fills every diagonal box with a random permutation of `1..=size`.
    ///
    /// Diagonal boxes share neither rows nor columns, so the permutations can
    /// never conflict. For any supported size this seeds at least one full
    /// box chain, which keeps the solver's clue floor satisfied.
    fn fill_diagonal_boxes(&self, board: &mut Board, rng: &mut Pcg64Mcg) {
        let mut values: Vec<u8> = ValueSet::full(self.size).iter().collect();
        for diagonal in 0..self.box_size {
            values.shuffle(rng);
            for (pos, &value) in board.box_positions(diagonal, diagonal).zip(&values) {
                board.set(pos, value);
            }
        }
    }

    /// Clears `blanks_count` cells of a copy of `answer`, distributing the
    /// blanks as evenly as possible across the boxes.
    ///
    /// Each box receives `blanks_count / box_count` blanks; the remainder goes
    /// one-per-box to the first boxes in row-major order. Which cells are
    /// blanked within a box is uniformly random without replacement.
    fn remove_blanks(&self, answer: &Board, rng: &mut Pcg64Mcg) -> (Board, Vec<Position>) {
        let mut board = answer.clone();
        let region_count = self.size;
        let per_region = self.blanks_count / region_count;
        let mut extra = self.blanks_count % region_count;

        let mut blank_positions = Vec::with_capacity(self.blanks_count);
        for box_row in 0..self.box_size {
            for box_col in 0..self.box_size {
                let mut take = per_region;
                if extra > 0 {
                    take += 1;
                    extra -= 1;
                }

                let mut cells: Vec<Position> = board.box_positions(box_row, box_col).collect();
                cells.shuffle(rng);
                for pos in cells.into_iter().take(take) {
                    board.set(pos, 0);
                    blank_positions.push(pos);
                }
            }
        }
        (board, blank_positions)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_rejects_non_square_size() {
        assert_eq!(
            PuzzleGenerator::new(8, 10).unwrap_err(),
            ConfigError::SizeNotPerfectSquare { size: 8 }
        );
        assert_eq!(
            PuzzleGenerator::new(0, 0).unwrap_err(),
            ConfigError::SizeNotPerfectSquare { size: 0 }
        );
    }

    #[test]
    fn test_new_rejects_excessive_blanks() {
        // 81 - 17 = 64 is the most a 9x9 puzzle can lose
        assert!(PuzzleGenerator::new(9, 64).is_ok());
        assert_eq!(
            PuzzleGenerator::new(9, 65).unwrap_err(),
            ConfigError::BlanksOutOfRange {
                blanks_count: 65,
                size: 9
            }
        );
    }

    #[test]
    fn test_new_rejects_grids_below_clue_floor() {
        // a 4x4 grid has 16 cells, below the 17-clue floor, so even zero
        // blanks is outside the allowed range
        assert_eq!(
            PuzzleGenerator::new(4, 0).unwrap_err(),
            ConfigError::BlanksOutOfRange {
                blanks_count: 0,
                size: 4
            }
        );
    }

    #[test]
    fn test_generate_seeded_is_deterministic() {
        let generator = PuzzleGenerator::new(9, 40).unwrap();
        let first = generator.generate_seeded(7).unwrap();
        let second = generator.generate_seeded(7).unwrap();
        assert_eq!(first, second);

        let other = generator.generate_seeded(8).unwrap();
        assert_ne!(first, other);
    }

    #[test]
    fn test_blanks_distribute_evenly_across_boxes() {
        // 40 blanks over 9 boxes: 4 everywhere, plus one extra in the first
        // four boxes in row-major order
        let generator = PuzzleGenerator::new(9, 40).unwrap();
        let puzzle = generator.generate_seeded(1).unwrap();

        assert_eq!(puzzle.board.filled_count(), 41);
        assert_eq!(puzzle.blank_positions.len(), 40);

        let mut per_box = [0usize; 9];
        for pos in &puzzle.blank_positions {
            let (box_row, box_col) = pos.box_coords(3);
            per_box[box_row * 3 + box_col] += 1;
        }
        assert_eq!(per_box, [5, 5, 5, 5, 4, 4, 4, 4, 4]);
    }

    #[test]
    fn test_generated_puzzle_matches_answer() {
        let generator = PuzzleGenerator::new(9, 40).unwrap();
        let puzzle = generator.generate_seeded(2).unwrap();

        assert!(puzzle.answer.is_complete());
        assert!(numforge_solver::is_valid(&puzzle.answer));

        for pos in puzzle.board.positions() {
            let value = puzzle.board.get(pos);
            if value != 0 {
                assert_eq!(value, puzzle.answer.get(pos));
            }
        }
        for &pos in &puzzle.blank_positions {
            assert_eq!(puzzle.board.get(pos), 0);
        }
    }

    #[test]
    fn test_generated_puzzle_is_solvable() {
        let generator = PuzzleGenerator::new(9, 50).unwrap();
        let puzzle = generator.generate_seeded(3).unwrap();

        let mut copy = puzzle.board.clone();
        assert!(numforge_solver::solve(&mut copy));
        assert!(numforge_solver::is_valid(&copy));
    }

    #[test]
    fn test_generate_with_zero_blanks() {
        let generator = PuzzleGenerator::new(9, 0).unwrap();
        let puzzle = generator.generate_seeded(4).unwrap();

        assert_eq!(puzzle.board, puzzle.answer);
        assert!(puzzle.blank_positions.is_empty());
    }

    #[test]
    fn test_generate_at_maximum_blanks() {
        let generator = PuzzleGenerator::new(9, 64).unwrap();
        let puzzle = generator.generate_seeded(5).unwrap();

        assert_eq!(puzzle.board.filled_count(), MIN_CLUES);
        let mut copy = puzzle.board.clone();
        assert!(numforge_solver::solve(&mut copy));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_round_trip(blanks in 0usize..=64, seed in any::<u64>()) {
            let generator = PuzzleGenerator::new(9, blanks).unwrap();
            let puzzle = generator.generate_seeded(seed).unwrap();

            prop_assert_eq!(puzzle.board.filled_count(), 81 - blanks);
            prop_assert_eq!(puzzle.blank_positions.len(), blanks);

            let mut copy = puzzle.board.clone();
            prop_assert!(numforge_solver::solve(&mut copy));
        }
    }
}
