//! Basic example of using the solver engine

use sudoku_engine::{Grid, GridError, SolveObserver, SolveOutcome, Solver, SolverConfig};

/// Prints every snapshot the solver reports, numbered.
struct SnapshotPrinter {
    snapshots: u32,
}

impl SolveObserver for SnapshotPrinter {
    fn on_step(&mut self, grid: &Grid) {
        self.snapshots += 1;
        println!(
            "Snapshot {} ({} cells filled):",
            self.snapshots,
            grid.given_count()
        );
        println!("{grid}");
    }

    fn on_solved(&mut self, _grid: &Grid) {
        println!("Search finished after {} snapshots.", self.snapshots);
    }
}

fn main() -> Result<(), GridError> {
    env_logger::init();

    let puzzle =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let mut grid = Grid::from_string(puzzle)?;

    println!("Puzzle ({} givens):", grid.given_count());
    println!("{grid}");

    let validation = grid.validate();
    if !validation.is_valid {
        println!("Puzzle rejected: {:?}", validation.conflict);
        return Ok(());
    }

    // A high cadence keeps the output readable; lower it to watch the
    // search cell by cell.
    let solver = Solver::with_config(SolverConfig { notify_every: 400 });
    let mut printer = SnapshotPrinter { snapshots: 0 };

    println!("Solving...");
    match solver.solve_observed(&mut grid, &mut printer) {
        SolveOutcome::Solved => {
            println!("Solution:");
            println!("{grid}");
        }
        outcome => println!("No solution: {outcome}"),
    }

    Ok(())
}
