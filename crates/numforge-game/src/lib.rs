//! Interactive Sudoku game sessions for the numforge engine.
//!
//! A [`Game`] wraps a generated puzzle and tracks everything a presentation
//! layer needs: given versus player-filled cells, pencil sketches, a cursor
//! selection, and the strike counter. Placements are validated against both
//! the Sudoku rules and the puzzle's answer key, so a committed value is
//! always correct.
//!
//! # Examples
//!
//! ```
//! use numforge_game::Game;
//! use numforge_generator::PuzzleGenerator;
//!
//! let puzzle = PuzzleGenerator::new(9, 40)?.generate_seeded(42)?;
//! let mut game = Game::new(puzzle);
//!
//! assert!(!game.is_finished());
//! assert_eq!(game.strikes(), 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod game;

pub use self::game::{CellState, Game, GameError, Placement};
