//! Rectangular cell surface with bounds-checked access and reversible
//! single-cell mutation.
//!
//! The grid is read-many/mutate-rarely: every simulation read goes through
//! the bounds-checked accessors, and the only write is the single-cell trial
//! placement used by the obstruction search. Size is fixed at construction.

use std::fmt;

use crate::core::heading::Heading;

/// One cell of the patrol map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Obstacle,
    /// The guard's starting cell. Treated as open ground once vacated.
    Guard(Heading),
}

/// Grid coordinate. Valid only inside `[0, rows) × [0, cols)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Typed failures of the grid model and its parser.
///
/// None of these are retried anywhere: the computation is a single
/// deterministic pass, so every failure is terminal and surfaced to the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Accessor called with a position outside the grid. A caller bug, not
    /// an input problem.
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },
    /// No orientation marker anywhere in the input.
    NoGuardFound,
    /// Input contained no rows, or a first row of zero length.
    EmptyGrid,
    /// A row whose length differs from the first row's.
    MalformedGrid {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A character outside the `.#^>v<` alphabet.
    UnknownSymbol { symbol: char, row: usize, col: usize },
    /// All four neighbors of the start cell are in-bounds obstacles. The
    /// walk would rotate in place forever under Part One's halting rules,
    /// so such input is rejected before the walk begins.
    GuardEnclosed { position: Position },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                position,
                rows,
                cols,
            } => write!(
                f,
                "position ({}, {}) outside {}x{} grid",
                position.row, position.col, rows, cols
            ),
            Self::NoGuardFound => write!(f, "no guard marker in input"),
            Self::EmptyGrid => write!(f, "input contains no grid rows"),
            Self::MalformedGrid { row, len, expected } => write!(
                f,
                "row {} has length {}, expected {}",
                row, len, expected
            ),
            Self::UnknownSymbol { symbol, row, col } => write!(
                f,
                "unknown symbol '{}' at row {}, col {}",
                symbol, row, col
            ),
            Self::GuardEnclosed { position } => write!(
                f,
                "guard at ({}, {}) is enclosed by obstacles on all four sides",
                position.row, position.col
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Rectangular character surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from parsed rows, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(GridError::EmptyGrid),
        };
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, row_cells) in rows.iter().enumerate() {
            if row_cells.len() != cols {
                return Err(GridError::MalformedGrid {
                    row,
                    len: row_cells.len(),
                    expected: cols,
                });
            }
            cells.extend_from_slice(row_cells);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Bounds-checked read.
    pub fn cell_at(&self, position: Position) -> Result<Cell, GridError> {
        Ok(self.cells[self.index(position)?])
    }

    /// Bounds-checked write. Returns the previous cell kind so the caller
    /// can undo the mutation.
    pub fn set_cell(&mut self, position: Position, kind: Cell) -> Result<Cell, GridError> {
        let index = self.index(position)?;
        let previous = self.cells[index];
        self.cells[index] = kind;
        Ok(previous)
    }

    /// First orientation marker in row-major scan order.
    pub fn find_guard(&self) -> Result<(Position, Heading), GridError> {
        for (index, cell) in self.cells.iter().enumerate() {
            if let Cell::Guard(heading) = cell {
                let position = Position {
                    row: index / self.cols,
                    col: index % self.cols,
                };
                return Ok((position, *heading));
            }
        }
        Err(GridError::NoGuardFound)
    }

    /// Position one step ahead of `position` along `heading`, or `None`
    /// when that step leaves the grid.
    pub fn forward_of(&self, position: Position, heading: Heading) -> Option<Position> {
        let (row_delta, col_delta) = heading.delta();
        let row = position.row.checked_add_signed(row_delta)?;
        let col = position.col.checked_add_signed(col_delta)?;
        (row < self.rows && col < self.cols).then_some(Position { row, col })
    }

    fn index(&self, position: Position) -> Result<usize, GridError> {
        if position.row >= self.rows || position.col >= self.cols {
            return Err(GridError::OutOfBounds {
                position,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(position.row * self.cols + position.col)
    }
}
