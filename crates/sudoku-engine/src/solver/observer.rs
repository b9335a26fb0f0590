use crate::grid::Grid;

/// Strategy interface receiving board snapshots as a search progresses.
///
/// The search is single-threaded: while a callback runs, the borrowed grid
/// is quiescent, so an observer may read it freely and clone it to retain a
/// snapshot. An observer that animates may block briefly before returning;
/// the search resumes when the callback does.
pub trait SolveObserver {
    /// Called on the configured cadence with the current partial grid.
    /// Never called for backtracking undo steps.
    fn on_step(&mut self, grid: &Grid);

    /// Called exactly once with the completed grid when the search
    /// succeeds. Defaults to forwarding to [`SolveObserver::on_step`].
    fn on_solved(&mut self, grid: &Grid) {
        self.on_step(grid);
    }
}
