//! The shared patrol stepping rule and the two simulations built on it:
//! the visited-position tracker and the cycle detector.
//!
//! Both simulations apply exactly the same micro-step; they differ only in
//! what they record and when they halt. Keeping the rule in one place is
//! what guarantees Part One and Part Two agree on trajectory.

use std::collections::HashSet;

use crate::core::grid::{Cell, Grid, GridError, Position};
use crate::core::heading::Heading;

/// Complete simulation state.
///
/// Two walks in the same state produce identical future behavior, which is
/// what makes full-state recurrence decisive for loop detection: a guard
/// can revisit a cell under a different heading without looping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuardState {
    pub position: Position,
    pub heading: Heading,
}

/// One application of the patrol rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Forward cell was an obstacle; the guard turned in place.
    Rotated(GuardState),
    /// Forward cell was passable; the guard moved onto it.
    Advanced(GuardState),
    /// Forward position is outside the grid.
    Left,
}

/// Verdict of a cycle-detecting walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkVerdict {
    /// The guard stepped off the grid.
    LeftGrid,
    /// The guard revisited a full (position, heading) state.
    Loop,
}

/// Result of a cycle-detecting walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOutcome {
    pub verdict: WalkVerdict,
    /// Distinct cells occupied up to the halt.
    pub visited: usize,
}

/// Apply the patrol rule once: leave the grid, turn in place, or advance.
fn step(grid: &Grid, state: GuardState) -> Result<Step, GridError> {
    let Some(forward) = grid.forward_of(state.position, state.heading) else {
        return Ok(Step::Left);
    };
    match grid.cell_at(forward)? {
        Cell::Obstacle => Ok(Step::Rotated(GuardState {
            heading: state.heading.rotate_clockwise(),
            ..state
        })),
        // Open ground, or the start cell the guard has since vacated.
        Cell::Open | Cell::Guard(_) => Ok(Step::Advanced(GuardState {
            position: forward,
            ..state
        })),
    }
}

/// Part One: count distinct cells the guard occupies before leaving the
/// grid, including the start.
///
/// The unmodified input grid is guaranteed to let the guard leave, so no
/// loop handling is needed here. The one exception is a start cell walled
/// in on all four sides, which has no halting rule under Part One at all;
/// [`reject_enclosed`] refuses it up front instead of spinning forever.
pub fn count_visited(grid: &Grid) -> Result<usize, GridError> {
    let (position, heading) = grid.find_guard()?;
    reject_enclosed(grid, position)?;
    let mut state = GuardState { position, heading };
    let mut visited = HashSet::new();
    visited.insert(state.position);
    loop {
        match step(grid, state)? {
            Step::Advanced(next) => {
                visited.insert(next.position);
                state = next;
            }
            Step::Rotated(next) => state = next,
            Step::Left => return Ok(visited.len()),
        }
    }
}

/// Walk from `start`, halting the moment a full state repeats or the guard
/// leaves the grid.
///
/// The current state is checked against the seen set before every
/// micro-step, including the first, and rotations count as states of their
/// own. That ordering matters: a guard spinning in place revisits a state
/// after at most four rotations and is reported as a loop rather than
/// walking the rule forever.
pub fn detect_loop(grid: &Grid, start: GuardState) -> Result<WalkOutcome, GridError> {
    let mut states = HashSet::new();
    let mut visited = HashSet::new();
    let mut state = start;
    visited.insert(state.position);
    loop {
        if !states.insert(state) {
            return Ok(WalkOutcome {
                verdict: WalkVerdict::Loop,
                visited: visited.len(),
            });
        }
        match step(grid, state)? {
            Step::Advanced(next) => {
                visited.insert(next.position);
                state = next;
            }
            Step::Rotated(next) => state = next,
            Step::Left => {
                return Ok(WalkOutcome {
                    verdict: WalkVerdict::LeftGrid,
                    visited: visited.len(),
                });
            }
        }
    }
}

/// Reject a start cell whose four neighbors are all in-bounds obstacles.
///
/// Only the start can be enclosed: any other cell is entered through an
/// open neighbor. An off-grid neighbor does not enclose, since stepping
/// toward it ends the walk.
fn reject_enclosed(grid: &Grid, position: Position) -> Result<(), GridError> {
    let headings = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];
    let enclosed = headings.iter().all(|&heading| {
        grid.forward_of(position, heading)
            .is_some_and(|forward| grid.cell_at(forward) == Ok(Cell::Obstacle))
    });
    if enclosed {
        return Err(GridError::GuardEnclosed { position });
    }
    Ok(())
}
