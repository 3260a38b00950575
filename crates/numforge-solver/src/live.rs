//! Observer-driven backtracking for step-by-step visualization.

use derive_more::IsVariant;
use numforge_core::{Board, Position, ValueSet};

use crate::is_safe;

/// Observer decision returned from [`StepObserver::on_step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum SolveControl {
    /// Keep searching.
    Continue,
    /// Stop the search; the board is restored before [`solve_live`] returns.
    Cancel,
}

/// Receives a notification after every state mutation of a live solve.
///
/// [`solve_live`] calls [`on_step`] once after each trial placement and once
/// after each undo, so a presentation layer can repaint the board and insert a
/// display delay between steps. Returning [`SolveControl::Cancel`] aborts the
/// search from any depth; the cancellation is threaded through the recursion
/// frames, undoing trial placements on the way out.
///
/// [`on_step`]: StepObserver::on_step
pub trait StepObserver {
    /// Called after `value` was placed at (`placed == true`) or removed from
    /// (`placed == false`) the cell at `pos`.
    fn on_step(&mut self, board: &Board, pos: Position, value: u8, placed: bool) -> SolveControl;
}

impl<F> StepObserver for F
where
    F: FnMut(&Board, Position, u8, bool) -> SolveControl,
{
    fn on_step(&mut self, board: &Board, pos: Position, value: u8, placed: bool) -> SolveControl {
        self(board, pos, value, placed)
    }
}

/// Attempts to fill every empty cell of `board` in place, reporting each
/// placement and undo to `observer`.
///
/// Unlike [`solve`], the search branches on the first empty cell in row-major
/// order and tries values in ascending order; there is no candidate map and no
/// clue-floor check. This trades speed for a step sequence that is easy to
/// follow visually.
///
/// Returns `true` if a complete legal assignment was found. On failure or
/// cancellation the board is restored to its original state.
///
/// # Examples
///
/// ```
/// use numforge_core::Board;
/// use numforge_solver::{SolveControl, solve_live};
///
/// let mut board: Board = "12343412....4321".parse()?;
/// let mut steps = 0;
/// let solved = solve_live(&mut board, &mut |_: &Board, _, _, _| {
///     steps += 1;
///     SolveControl::Continue
/// });
///
/// assert!(solved);
/// assert!(board.is_complete());
/// assert!(steps >= 4); // at least one placement per empty cell
/// # Ok::<(), numforge_core::ParseBoardError>(())
/// ```
///
/// [`solve`]: crate::solve
pub fn solve_live(board: &mut Board, observer: &mut impl StepObserver) -> bool {
    search(board, observer) == Status::Solved
}

#[derive(Debug, PartialEq, Eq)]
enum Status {
    Solved,
    Exhausted,
    Cancelled,
}

fn search(board: &mut Board, observer: &mut impl StepObserver) -> Status {
    let Some(pos) = board.first_empty() else {
        return Status::Solved;
    };

    for value in ValueSet::full(board.size()) {
        if !is_safe(board, value, pos) {
            continue;
        }

        board.set(pos, value);
        if observer.on_step(board, pos, value, true).is_cancel() {
            board.set(pos, 0);
            return Status::Cancelled;
        }

        match search(board, observer) {
            Status::Solved => return Status::Solved,
            Status::Cancelled => {
                board.set(pos, 0);
                return Status::Cancelled;
            }
            Status::Exhausted => {}
        }

        board.set(pos, 0);
        if observer.on_step(board, pos, value, false).is_cancel() {
            return Status::Cancelled;
        }
    }
    Status::Exhausted
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIKI_PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_solve_live_solves_and_reports_steps() {
        let mut board: Board = WIKI_PUZZLE.parse().unwrap();
        let mut placements = 0;
        let mut undos = 0;
        let solved = solve_live(&mut board, &mut |_: &Board, _, _, placed| {
            if placed {
                placements += 1;
            } else {
                undos += 1;
            }
            SolveControl::Continue
        });

        assert!(solved);
        assert!(board.is_complete());
        assert!(crate::is_valid(&board));
        // 51 empty cells, so at least that many placements, and every undone
        // placement is reported as well
        assert!(placements >= 51);
        assert_eq!(placements - undos, 51);
    }

    #[test]
    fn test_solve_live_has_no_clue_floor() {
        // unlike solve, live solving accepts a sparse (even empty) 4x4 board
        let mut board = Board::empty(2);
        let solved = solve_live(&mut board, &mut |_: &Board, _, _, _| SolveControl::Continue);
        assert!(solved);
        assert!(board.is_complete());
    }

    #[test]
    fn test_solve_live_cancellation_restores_board() {
        let mut board: Board = WIKI_PUZZLE.parse().unwrap();
        let before = board.clone();
        let mut steps = 0;
        let solved = solve_live(&mut board, &mut |_: &Board, _, _, _| {
            steps += 1;
            if steps >= 20 {
                SolveControl::Cancel
            } else {
                SolveControl::Continue
            }
        });

        assert!(!solved);
        assert_eq!(steps, 20);
        assert_eq!(board, before);
    }

    #[test]
    fn test_solve_live_exhausts_unsolvable_board() {
        // 2 pinned where the unique solution needs 4
        let mut board: Board = WIKI_PUZZLE.parse().unwrap();
        board.set(Position::new(0, 2), 2);
        let before = board.clone();
        let solved = solve_live(&mut board, &mut |_: &Board, _, _, _| SolveControl::Continue);
        assert!(!solved);
        assert_eq!(board, before);
    }
}
