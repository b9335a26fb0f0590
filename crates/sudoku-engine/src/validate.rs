//! Pre-search validation: duplicate detection across rows, columns, and blocks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::{Grid, Position, BLOCK_SIZE, GRID_SIZE};

/// The three constraint-group kinds of a standard board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKind {
    Row,
    Column,
    Block,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKind::Row => write!(f, "row"),
            GroupKind::Column => write!(f, "column"),
            GroupKind::Block => write!(f, "block"),
        }
    }
}

/// A duplicated digit found within one constraint group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Kind of group containing the duplicate.
    pub kind: GroupKind,
    /// Group index, 0..=8; blocks count in row-major block order.
    pub index: usize,
    /// The duplicated digit.
    pub digit: u8,
}

/// Verdict of a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when no group repeats a digit.
    pub is_valid: bool,
    /// First duplicate found, when invalid.
    pub conflict: Option<Conflict>,
}

impl ValidationResult {
    fn valid() -> Self {
        Self {
            is_valid: true,
            conflict: None,
        }
    }

    fn invalid(conflict: Conflict) -> Self {
        Self {
            is_valid: false,
            conflict: Some(conflict),
        }
    }
}

/// The cells of one constraint group, in scan order.
fn group_cells(kind: GroupKind, index: usize) -> impl Iterator<Item = Position> {
    (0..GRID_SIZE).map(move |i| match kind {
        GroupKind::Row => Position::new(index, i),
        GroupKind::Column => Position::new(i, index),
        GroupKind::Block => Position::new(
            (index / BLOCK_SIZE) * BLOCK_SIZE + i / BLOCK_SIZE,
            (index % BLOCK_SIZE) * BLOCK_SIZE + i % BLOCK_SIZE,
        ),
    })
}

impl Grid {
    /// Check the grid for duplicate digits within any row, column, or 3x3
    /// block, ignoring blanks. Stops at the first duplicate found.
    ///
    /// Read-only. Both a starting position and a finished solution are
    /// judged by this one check; a complete grid is correct exactly when it
    /// is valid. Callers are expected to validate before handing a grid to
    /// the solver.
    pub fn validate(&self) -> ValidationResult {
        for kind in [GroupKind::Row, GroupKind::Column, GroupKind::Block] {
            for index in 0..GRID_SIZE {
                let mut seen: u16 = 0;
                for pos in group_cells(kind, index) {
                    let Some(digit) = self.get(pos) else { continue };
                    let bit = 1u16 << digit;
                    if seen & bit != 0 {
                        return ValidationResult::invalid(Conflict { kind, index, digit });
                    }
                    seen |= bit;
                }
            }
        }
        ValidationResult::valid()
    }
}
