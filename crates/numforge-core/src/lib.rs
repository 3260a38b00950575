//! Core data structures for the numforge Sudoku engine.
//!
//! This crate provides the board representation and candidate bookkeeping shared
//! by the solving and generation components. Boards are square grids of side
//! `S`, where `S` is a perfect square (canonically 9); cell value `0` denotes
//! an empty cell and `1..=S` a filled one.
//!
//! # Overview
//!
//! - [`board`]: The [`Board`] grid itself, with row/column/box iteration and
//!   per-cell candidate computation.
//! - [`position`]: The [`Position`] coordinate type.
//! - [`value_set`]: [`ValueSet`], a bitmask set of cell values `1..=S`.
//! - [`candidate_map`]: [`CandidateMap`], the incrementally maintained map from
//!   empty cells to their legal values, with undo support for backtracking.
//!
//! # Examples
//!
//! ```
//! use numforge_core::{Board, Position};
//!
//! let mut board = Board::empty(3); // a 9x9 board
//! board.set(Position::new(4, 4), 5);
//!
//! // 5 is no longer a candidate anywhere in row 4, column 4, or the center box
//! let candidates = board.candidates_at(Position::new(4, 5));
//! assert!(!candidates.contains(5));
//! ```

pub mod board;
pub mod candidate_map;
pub mod position;
pub mod value_set;

pub use self::{
    board::{Board, ParseBoardError},
    candidate_map::{CandidateMap, PlacementUndo},
    position::Position,
    value_set::ValueSet,
};
