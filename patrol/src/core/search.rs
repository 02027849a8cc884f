//! Exhaustive single-cell obstruction trial over all open, non-start cells.

use crate::core::grid::{Cell, Grid, GridError, Position};
use crate::core::walker::{GuardState, WalkVerdict, detect_loop};

/// Holds one trial obstacle and restores the previous cell kind on drop.
///
/// Restoration must happen on every exit path, early returns included, so
/// that no candidate's placement leaks into a later candidate's trial.
struct TrialObstruction<'a> {
    grid: &'a mut Grid,
    position: Position,
    previous: Cell,
}

impl<'a> TrialObstruction<'a> {
    fn place(grid: &'a mut Grid, position: Position) -> Result<Self, GridError> {
        let previous = grid.set_cell(position, Cell::Obstacle)?;
        Ok(Self {
            grid,
            position,
            previous,
        })
    }

    fn grid(&self) -> &Grid {
        self.grid
    }
}

impl Drop for TrialObstruction<'_> {
    fn drop(&mut self) {
        // The position was validated in `place`, so the restore cannot fail.
        let _ = self.grid.set_cell(self.position, self.previous);
    }
}

/// Part Two: count the open cells (excluding the start) where placing a
/// single new obstacle traps the guard in a loop.
///
/// Cells are tried in row-major order, one at a time; the grid is returned
/// to its input state before this function returns. Cost is one full
/// cycle-detecting walk per open cell, quadratic in the cell count in the
/// worst case.
pub fn count_loop_inducing_obstructions(grid: &mut Grid) -> Result<usize, GridError> {
    let (position, heading) = grid.find_guard()?;
    let start = GuardState { position, heading };
    let (rows, cols) = grid.dimensions();

    let mut count = 0;
    for row in 0..rows {
        for col in 0..cols {
            let candidate = Position { row, col };
            if candidate == start.position || grid.cell_at(candidate)? != Cell::Open {
                continue;
            }
            let trial = TrialObstruction::place(grid, candidate)?;
            let outcome = detect_loop(trial.grid(), start)?;
            if outcome.verdict == WalkVerdict::Loop {
                count += 1;
            }
        }
    }
    Ok(count)
}
