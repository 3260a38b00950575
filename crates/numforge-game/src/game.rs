//! Game session state and input handling.

use derive_more::{Display, Error, IsVariant};
use numforge_core::{Board, Position};
use numforge_generator::Puzzle;
use numforge_solver::StepObserver;

/// The state of a single cell in a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// No value entered.
    Empty,
    /// Part of the generated puzzle; cannot be modified.
    Given(u8),
    /// A committed, validated player value.
    Filled(u8),
    /// A tentative pencil mark; not part of the board model.
    Sketch(u8),
}

/// Outcome of a committed placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Placement {
    /// The value was legal and matched the answer key; the cell is now filled.
    Correct,
    /// The value clashed with a peer or differed from the answer key; the cell
    /// was cleared and a strike recorded.
    Wrong,
}

/// Error returned by input operations on a [`Game`].
#[derive(Debug, Display, Error, PartialEq, Eq, Clone, Copy)]
pub enum GameError {
    /// No cell is currently selected.
    #[display("no cell is selected")]
    NothingSelected,
    /// The selected cell is part of the generated puzzle.
    #[display("cannot modify a given cell")]
    GivenCell,
    /// The selected cell already holds a committed value.
    #[display("cannot modify an already filled cell")]
    FilledCell,
}

/// A Sudoku game session.
///
/// Tracks the cell states of the playable grid, the current cursor selection,
/// and the strike counter. The generator's answer key is retained for the
/// lifetime of the session: a placement only commits when it both passes the
/// row/column/box safety check and matches the answer, so the session can
/// never reach a dead-end state.
///
/// # Examples
///
/// ```
/// use numforge_core::Position;
/// use numforge_game::{CellState, Game, Placement};
/// use numforge_generator::PuzzleGenerator;
///
/// let puzzle = PuzzleGenerator::new(9, 40)?.generate_seeded(42)?;
/// let blank = puzzle.blank_positions[0];
/// let answer = puzzle.answer.get(blank);
///
/// let mut game = Game::new(puzzle);
/// game.select(blank);
/// assert_eq!(game.place(answer)?, Placement::Correct);
/// assert_eq!(*game.cell(blank), CellState::Filled(answer));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: Vec<CellState>,
    answer: Board,
    selected: Option<Position>,
    strikes: usize,
    size: usize,
}

impl Game {
    /// Creates a new game from a generated puzzle.
    ///
    /// Every clue on the puzzle board becomes a [`CellState::Given`]; the
    /// blanked cells start [`CellState::Empty`].
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let Puzzle {
            board,
            answer,
            blank_positions: _,
            seed: _,
        } = puzzle;
        let size = board.size();
        let mut cells = vec![CellState::Empty; size * size];
        for pos in board.positions() {
            let value = board.get(pos);
            if value != 0 {
                cells[pos.row * size + pos.col] = CellState::Given(value);
            }
        }
        Self {
            cells,
            answer,
            selected: None,
            strikes: 0,
            size,
        }
    }

    /// Returns the board side length.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the state of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &CellState {
        assert!(pos.row < self.size && pos.col < self.size);
        &self.cells[pos.row * self.size + pos.col]
    }

    /// Returns the answer key the puzzle was generated with.
    #[must_use]
    pub const fn answer(&self) -> &Board {
        &self.answer
    }

    /// Moves the cursor to `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn select(&mut self, pos: Position) {
        assert!(pos.row < self.size && pos.col < self.size);
        self.selected = Some(pos);
    }

    /// Returns the currently selected cell, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Clears the cursor selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Returns the number of wrong placement attempts so far.
    #[must_use]
    pub const fn strikes(&self) -> usize {
        self.strikes
    }

    /// Returns a board snapshot of the committed state: given and filled
    /// values, with sketches treated as empty.
    #[must_use]
    pub fn board(&self) -> Board {
        let mut board = Board::empty(self.answer.box_size());
        for pos in board.positions().collect::<Vec<_>>() {
            match self.cells[pos.row * self.size + pos.col] {
                CellState::Given(value) | CellState::Filled(value) => board.set(pos, value),
                CellState::Empty | CellState::Sketch(_) => {}
            }
        }
        board
    }

    /// Returns `true` once every cell holds a committed value.
    ///
    /// Placements only commit when correct, so a finished game always matches
    /// the answer key.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.is_given() || cell.is_filled())
    }

    /// Writes a pencil sketch into the selected cell.
    ///
    /// Sketches are tentative: they are ignored by [`board`] and overwritten
    /// by the next sketch or placement on the same cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NothingSelected`] without a selection, and
    /// [`GameError::GivenCell`] / [`GameError::FilledCell`] when the selected
    /// cell cannot be modified.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in `1..=size`.
    ///
    /// [`board`]: Self::board
    pub fn sketch(&mut self, value: u8) -> Result<(), GameError> {
        assert!((1..=self.size).contains(&usize::from(value)));
        let pos = self.modifiable_selection()?;
        self.cells[pos.row * self.size + pos.col] = CellState::Sketch(value);
        Ok(())
    }

    /// Removes the sketch from the selected cell, if it holds one.
    ///
    /// # Errors
    ///
    /// Same conditions as [`sketch`](Self::sketch).
    pub fn clear_sketch(&mut self) -> Result<(), GameError> {
        let pos = self.modifiable_selection()?;
        self.cells[pos.row * self.size + pos.col] = CellState::Empty;
        Ok(())
    }

    /// Attempts to commit `value` into the selected cell.
    ///
    /// The placement commits as [`Placement::Correct`] only if it violates no
    /// row, column, or box constraint *and* matches the answer key. Otherwise
    /// the cell is cleared (dropping any sketch), the strike counter is
    /// incremented, and [`Placement::Wrong`] is returned; a wrong value is an
    /// expected game event, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NothingSelected`] without a selection, and
    /// [`GameError::GivenCell`] / [`GameError::FilledCell`] when the selected
    /// cell cannot be modified.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in `1..=size`.
    pub fn place(&mut self, value: u8) -> Result<Placement, GameError> {
        assert!((1..=self.size).contains(&usize::from(value)));
        let pos = self.modifiable_selection()?;

        let model = self.board();
        let index = pos.row * self.size + pos.col;
        if numforge_solver::is_safe(&model, value, pos) && self.answer.get(pos) == value {
            self.cells[index] = CellState::Filled(value);
            Ok(Placement::Correct)
        } else {
            self.cells[index] = CellState::Empty;
            self.strikes += 1;
            Ok(Placement::Wrong)
        }
    }

    /// Fills every remaining cell from a live solve of the committed state,
    /// reporting each solver step to `observer`.
    ///
    /// On success all empty and sketched cells become [`CellState::Filled`]
    /// and the game is finished. Returns `false` if the observer cancelled the
    /// solve; the session is left unchanged in that case.
    pub fn auto_solve(&mut self, observer: &mut impl StepObserver) -> bool {
        let mut model = self.board();
        if !numforge_solver::solve_live(&mut model, observer) {
            return false;
        }
        for pos in model.positions() {
            let index = pos.row * self.size + pos.col;
            if !self.cells[index].is_given() {
                self.cells[index] = CellState::Filled(model.get(pos));
            }
        }
        true
    }

    fn modifiable_selection(&self) -> Result<Position, GameError> {
        let pos = self.selected.ok_or(GameError::NothingSelected)?;
        match self.cell(pos) {
            CellState::Given(_) => Err(GameError::GivenCell),
            CellState::Filled(_) => Err(GameError::FilledCell),
            CellState::Empty | CellState::Sketch(_) => Ok(pos),
        }
    }
}
