//! Candidate-pruned backtracking with the minimum-remaining-values heuristic.

use log::trace;
use numforge_core::{Board, CandidateMap, Position, ValueSet};

/// The minimum number of clues a board must carry to count as a legal Sudoku.
///
/// 17 is the proven lower bound for a classic puzzle with a unique solution.
/// [`is_valid`] enforces this floor, and because [`solve`] re-validates the
/// board at every recursion level, `solve` rejects any board below the floor
/// outright. Callers that fill boards from sparse seedings must guarantee the
/// floor is met before solving.
pub const MIN_CLUES: usize = 17;

/// Attempts to fill every empty cell of `board` in place.
///
/// Returns `true` and leaves `board` solved on success. On failure the board is
/// restored to its original state (every trial assignment is undone on
/// backtrack) and `false` is returned; an unsolvable board is an expected
/// outcome, not an error.
///
/// The search maintains an incremental [`CandidateMap`] and always branches on
/// the cell with the fewest remaining candidates.
///
/// # Examples
///
/// ```
/// use numforge_core::Board;
/// use numforge_solver::solve;
///
/// // fewer than 17 clues: rejected immediately, board untouched
/// let mut sparse = Board::empty(3);
/// assert!(!solve(&mut sparse));
/// assert_eq!(sparse.filled_count(), 0);
/// ```
pub fn solve(board: &mut Board) -> bool {
    let mut candidates = CandidateMap::compute(board);
    backtrack(board, &mut candidates)
}

fn backtrack(board: &mut Board, candidates: &mut CandidateMap) -> bool {
    if !is_valid(board) {
        return false;
    }
    let Some((pos, cell_candidates)) = candidates.most_constrained() else {
        // Empty map means fully determined; completion is judged on the board
        // itself, since contradictory cells are pruned from the map.
        return board.is_complete();
    };

    trace!("trying cell {pos} with candidates {cell_candidates:?}");
    for value in cell_candidates {
        if !is_safe(board, value, pos) {
            continue;
        }
        trace!("placing {value} at {pos}");
        board.set(pos, value);
        let undo = candidates.place(pos, value);

        if backtrack(board, candidates) {
            return true;
        }

        trace!("backtracking: removing {value} from {pos}");
        board.set(pos, 0);
        candidates.undo(undo);
    }
    false
}

/// Checks whether `board` is a legal Sudoku state.
///
/// Requires both the structural invariant (no duplicate non-zero value in any
/// row, column, or box) and the [`MIN_CLUES`] floor. A structurally sound
/// board with fewer than 17 clues is *not* valid.
#[must_use]
pub fn is_valid(board: &Board) -> bool {
    if board.filled_count() < MIN_CLUES {
        return false;
    }
    for i in 0..board.size() {
        if has_duplicate(board, board.row_positions(i)) {
            return false;
        }
        if has_duplicate(board, board.col_positions(i)) {
            return false;
        }
    }
    for box_row in 0..board.box_size() {
        for box_col in 0..board.box_size() {
            if has_duplicate(board, board.box_positions(box_row, box_col)) {
                return false;
            }
        }
    }
    true
}

fn has_duplicate(board: &Board, positions: impl Iterator<Item = Position>) -> bool {
    let mut seen = ValueSet::EMPTY;
    for pos in positions {
        let value = board.get(pos);
        if value != 0 {
            if seen.contains(value) {
                return true;
            }
            seen.insert(value);
        }
    }
    false
}

/// Returns `true` if placing `value` at `pos` violates no row, column, or box
/// uniqueness constraint.
///
/// Ignores the minimum-clue rule; this is the per-placement check used both by
/// the search and by interactive play.
#[must_use]
pub fn is_safe(board: &Board, value: u8, pos: Position) -> bool {
    let row_clash = board.row_positions(pos.row).any(|p| board.get(p) == value);
    let col_clash = board.col_positions(pos.col).any(|p| board.get(p) == value);
    let (box_row, box_col) = pos.box_coords(board.box_size());
    let box_clash = board
        .box_positions(box_row, box_col)
        .any(|p| board.get(p) == value);
    !(row_clash || col_clash || box_clash)
}

/// Returns the candidate set for the cell at `pos`: every value `1..=S` not
/// already used in the cell's row, column, or box.
#[must_use]
pub fn candidates(board: &Board, pos: Position) -> ValueSet {
    board.candidates_at(pos)
}
