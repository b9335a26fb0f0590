use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Configuration for solve runs.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Emit one observer step per this many successful tentative
    /// assignments; `0` disables step notifications. Cosmetic pacing only,
    /// with no effect on the search itself.
    pub notify_every: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { notify_every: 2 }
    }
}

/// Terminal outcome of a solve run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolveOutcome {
    /// The grid was completed in place.
    Solved,
    /// The full search space was exhausted without finding a completion.
    /// An expected result for contradictory puzzles, not an error.
    Unsolvable,
    /// The cancel token was flipped while the search was running.
    Cancelled,
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved)
    }
}

impl fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveOutcome::Solved => write!(f, "solved"),
            SolveOutcome::Unsolvable => write!(f, "unsolvable"),
            SolveOutcome::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Cooperative cancellation flag shared with a running solve.
///
/// Clones share one flag. Flip it from another thread or from an observer
/// callback; the search checks it at every candidate trial, unwinds all
/// tentative assignments, and reports [`SolveOutcome::Cancelled`].
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the associated solve.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
