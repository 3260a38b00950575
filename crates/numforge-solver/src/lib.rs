//! Backtracking Sudoku solver for the numforge engine.
//!
//! The solver is a stateless utility over a caller-supplied [`Board`]: it holds
//! no state between calls, and every function reports its outcome as a return
//! value. Failure to find a solution is an expected boolean result, never an
//! error.
//!
//! Two search entry points are provided:
//!
//! - [`solve`]: candidate-pruned backtracking with the minimum-remaining-values
//!   heuristic. This is the fast path used by the generator.
//! - [`solve_live`]: plain first-empty-cell backtracking that reports every
//!   placement and undo to a [`StepObserver`], for step-by-step visualization.
//!   The observer can cancel the search at any step.
//!
//! # Examples
//!
//! ```
//! use numforge_core::Board;
//!
//! let mut board: Board =
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
//!         .parse()?;
//!
//! assert!(numforge_solver::solve(&mut board));
//! assert!(board.is_complete());
//! assert!(numforge_solver::is_valid(&board));
//! # Ok::<(), numforge_core::ParseBoardError>(())
//! ```
//!
//! [`Board`]: numforge_core::Board

mod backtrack;
mod live;

pub use self::{
    backtrack::{MIN_CLUES, candidates, is_safe, is_valid, solve},
    live::{SolveControl, StepObserver, solve_live},
};
