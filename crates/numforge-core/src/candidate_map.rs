//! Incremental candidate tracking for backtracking search.

use std::collections::BTreeMap;

use crate::{board::Board, position::Position, value_set::ValueSet};

/// A map from empty cells to their candidate values, maintained incrementally
/// during search instead of being recomputed at every step.
///
/// Invariant: every entry has a non-empty candidate set. When striking a value
/// empties a peer's set, the entry is pruned immediately; an empty map
/// therefore means the board is fully determined, not necessarily solved.
///
/// [`place`] records everything it changes in a [`PlacementUndo`], and
/// [`undo`] restores it exactly, so one trial placement per recursion frame
/// costs a handful of saved entries rather than a deep clone of the map.
///
/// [`place`]: CandidateMap::place
/// [`undo`]: CandidateMap::undo
///
/// # Examples
///
/// ```
/// use numforge_core::{Board, CandidateMap, Position};
///
/// let board: Board = "12343412....4321".parse()?;
/// let mut candidates = CandidateMap::compute(&board);
/// assert_eq!(candidates.len(), 4);
///
/// let undo = candidates.place(Position::new(2, 0), 2);
/// assert_eq!(candidates.len(), 3);
///
/// candidates.undo(undo);
/// assert_eq!(candidates.len(), 4);
/// # Ok::<(), numforge_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMap {
    box_size: usize,
    cells: BTreeMap<Position, ValueSet>,
}

/// Undo record for one [`CandidateMap::place`] call.
///
/// Holds the prior candidate sets of every entry the placement modified or
/// removed. Records must be undone in reverse order of their creation.
#[derive(Debug)]
#[must_use = "an unapplied undo record leaves the map inconsistent on backtrack"]
pub struct PlacementUndo {
    saved: Vec<(Position, ValueSet)>,
}

impl CandidateMap {
    /// Computes the candidate map for every empty cell of `board`.
    ///
    /// Cells whose candidate set is already empty (contradictions) are not
    /// included, per the non-empty-entry invariant.
    #[must_use]
    pub fn compute(board: &Board) -> Self {
        let mut cells = BTreeMap::new();
        for pos in board.positions() {
            if board.get(pos) == 0 {
                let candidates = board.candidates_at(pos);
                if !candidates.is_empty() {
                    cells.insert(pos, candidates);
                }
            }
        }
        Self {
            box_size: board.box_size(),
            cells,
        }
    }

    /// Returns the number of tracked cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cells are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the candidate set for `pos`, if the cell is tracked.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<ValueSet> {
        self.cells.get(&pos).copied()
    }

    /// Returns the tracked cell with the fewest candidates, together with its
    /// candidate set (the minimum-remaining-values heuristic).
    ///
    /// Ties resolve to the first such cell in row-major order, keeping the
    /// search deterministic.
    #[must_use]
    pub fn most_constrained(&self) -> Option<(Position, ValueSet)> {
        self.cells
            .iter()
            .min_by_key(|(_, candidates)| candidates.len())
            .map(|(&pos, &candidates)| (pos, candidates))
    }

    /// Records the placement of `value` at `pos`: drops the cell's own entry
    /// and strikes `value` from every tracked peer sharing its row, column, or
    /// box, pruning peers whose candidate set empties out.
    ///
    /// Returns the undo record that reverses the whole operation.
    pub fn place(&mut self, pos: Position, value: u8) -> PlacementUndo {
        let mut saved = Vec::new();
        if let Some(candidates) = self.cells.remove(&pos) {
            saved.push((pos, candidates));
        }

        let struck: Vec<Position> = self
            .cells
            .iter()
            .filter(|&(&peer, candidates)| {
                peer.shares_house(pos, self.box_size) && candidates.contains(value)
            })
            .map(|(&peer, _)| peer)
            .collect();

        for peer in struck {
            if let Some(candidates) = self.cells.get_mut(&peer) {
                saved.push((peer, *candidates));
                candidates.remove(value);
                if candidates.is_empty() {
                    self.cells.remove(&peer);
                }
            }
        }

        PlacementUndo { saved }
    }

    /// Restores the map to its state before the matching [`place`] call.
    ///
    /// [`place`]: CandidateMap::place
    pub fn undo(&mut self, undo: PlacementUndo) {
        for (pos, candidates) in undo.saved {
            self.cells.insert(pos, candidates);
        }
    }

    /// Returns an iterator over tracked cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, ValueSet)> + '_ {
        self.cells.iter().map(|(&pos, &candidates)| (pos, candidates))
    }
}
