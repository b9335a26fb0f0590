//! Depth-first backtracking over blank cells.

use crate::grid::Grid;
use crate::solver::observer::SolveObserver;
use crate::solver::types::CancelToken;

/// Internal search verdict. Cancellation is kept distinct from ordinary
/// exhaustion so both unwind the same way but finish differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Search {
    Solved,
    Exhausted,
    Cancelled,
}

/// Per-invocation search state. Owns the notification counter, so repeated
/// or concurrent solves stay independent of each other.
pub(crate) struct SearchCtx<'a> {
    pub(crate) observer: Option<&'a mut dyn SolveObserver>,
    cancel: &'a CancelToken,
    notify_every: u32,
    pub(crate) placements: u64,
    pub(crate) backtracks: u64,
}

impl<'a> SearchCtx<'a> {
    pub(crate) fn new(
        observer: Option<&'a mut dyn SolveObserver>,
        cancel: &'a CancelToken,
        notify_every: u32,
    ) -> Self {
        Self {
            observer,
            cancel,
            notify_every,
            placements: 0,
            backtracks: 0,
        }
    }

    /// Record a successful tentative assignment, notifying on cadence.
    fn placed(&mut self, grid: &Grid) {
        self.placements += 1;
        if self.notify_every == 0 || self.placements % u64::from(self.notify_every) != 0 {
            return;
        }
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_step(grid);
        }
    }
}

/// Recursive search: first blank cell in row-major order, candidates tried
/// in ascending order. Every tentative assignment is undone on every
/// non-success exit path, cancellation included, so the grid that comes back
/// from a failed search holds exactly its original cells.
pub(crate) fn search(grid: &mut Grid, ctx: &mut SearchCtx<'_>) -> Search {
    let Some(pos) = grid.first_empty() else {
        return Search::Solved;
    };

    for digit in 1..=9u8 {
        if ctx.cancel.is_cancelled() {
            return Search::Cancelled;
        }
        if !grid.permits(pos, digit) {
            continue;
        }

        grid.set_unchecked(pos, Some(digit));
        ctx.placed(grid);

        match search(grid, ctx) {
            Search::Solved => return Search::Solved,
            verdict => {
                grid.set_unchecked(pos, None);
                ctx.backtracks += 1;
                if verdict == Search::Cancelled {
                    return Search::Cancelled;
                }
            }
        }
    }

    Search::Exhausted
}
