//! Backtracking Sudoku solver engine.
//!
//! Two operations form the public surface: [`Grid::validate`], which checks
//! a partially filled board for duplicate digits in any row, column, or 3x3
//! block, and [`Solver::solve`] (plus its observed and cancellable
//! variants), which completes the board in place by depth-first
//! backtracking. Callers validate first and solve only grids that pass.
//! Progress observation and cooperative cancellation are injected per call;
//! see [`SolveObserver`] and [`CancelToken`].
//!
//! ```
//! use sudoku_engine::{Grid, Solver};
//!
//! let mut grid = Grid::from_string(
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
//! )?;
//! assert!(grid.validate().is_valid);
//!
//! let outcome = Solver::new().solve(&mut grid);
//! assert!(outcome.is_solved());
//! assert!(grid.is_complete());
//! # Ok::<(), sudoku_engine::GridError>(())
//! ```

mod grid;
mod solver;
mod validate;

pub use grid::{Grid, GridError, Position, BLOCK_SIZE, CELL_COUNT, GRID_SIZE};
pub use solver::{CancelToken, SolveObserver, SolveOutcome, Solver, SolverConfig};
pub use validate::{Conflict, GroupKind, ValidationResult};
