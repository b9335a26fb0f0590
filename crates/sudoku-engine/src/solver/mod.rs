//! Backtracking solver with progress observation.
//!
//! The search is plain depth-first backtracking: blank cells are visited in
//! fixed row-major order and candidates tried in ascending order, so every
//! run over the same grid produces the same result. There is no candidate
//! bookkeeping and no heuristic cell selection; pruning is the row/column/
//! block legality check alone.

mod backtrack;
mod observer;
mod types;

use std::time::Instant;

use log::debug;

use backtrack::{Search, SearchCtx};

use crate::grid::Grid;

pub use observer::SolveObserver;
pub use types::{CancelToken, SolveOutcome, SolverConfig};

/// The solver engine. Stateless between calls; each run owns its own
/// counters, so one instance can serve any number of grids in sequence.
pub struct Solver {
    config: SolverConfig,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver with the default configuration.
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Create a solver with a custom configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solve the grid in place with no observer.
    ///
    /// Validity of the starting grid is the caller's responsibility: run
    /// [`Grid::validate`] first and only solve grids that pass. The solver
    /// does not re-check it.
    pub fn solve(&self, grid: &mut Grid) -> SolveOutcome {
        self.solve_with(grid, None, &CancelToken::new())
    }

    /// Solve the grid in place, reporting progress to `observer`.
    pub fn solve_observed(
        &self,
        grid: &mut Grid,
        observer: &mut dyn SolveObserver,
    ) -> SolveOutcome {
        self.solve_with(grid, Some(observer), &CancelToken::new())
    }

    /// Full form: optional observer plus cooperative cancellation.
    ///
    /// Mutates `grid` in place. On [`SolveOutcome::Solved`] the grid is
    /// complete and the observer has received its final notification; on
    /// any other outcome every originally blank cell is blank again. Cells
    /// that were filled before the call are never written.
    pub fn solve_with<'a>(
        &self,
        grid: &mut Grid,
        observer: Option<&'a mut dyn SolveObserver>,
        cancel: &'a CancelToken,
    ) -> SolveOutcome {
        let started = Instant::now();
        let mut ctx = SearchCtx::new(observer, cancel, self.config.notify_every);

        let outcome = match backtrack::search(grid, &mut ctx) {
            Search::Solved => {
                if let Some(observer) = ctx.observer.as_deref_mut() {
                    observer.on_solved(grid);
                }
                SolveOutcome::Solved
            }
            Search::Exhausted => SolveOutcome::Unsolvable,
            Search::Cancelled => SolveOutcome::Cancelled,
        };

        debug!(
            "search {}: {} placements, {} backtracks in {:?}",
            outcome,
            ctx.placements,
            ctx.backtracks,
            started.elapsed()
        );
        outcome
    }
}
