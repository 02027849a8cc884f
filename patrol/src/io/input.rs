//! Map loading: file reading and text-to-grid parsing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::grid::{Cell, Grid, GridError};
use crate::core::heading::Heading;

/// Parse the `.#^>v<` alphabet into a grid.
///
/// Pure: every failure is a typed [`GridError`], so callers can tell input
/// problems apart from I/O problems.
pub fn parse_grid(text: &str) -> Result<Grid, GridError> {
    let mut rows = Vec::new();
    for (row, line) in text.lines().enumerate() {
        let mut cells = Vec::with_capacity(line.len());
        for (col, symbol) in line.chars().enumerate() {
            let cell = match symbol {
                '.' => Cell::Open,
                '#' => Cell::Obstacle,
                _ => match Heading::from_marker(symbol) {
                    Some(heading) => Cell::Guard(heading),
                    None => return Err(GridError::UnknownSymbol { symbol, row, col }),
                },
            };
            cells.push(cell);
        }
        rows.push(cells);
    }
    Grid::from_rows(rows)
}

/// Read and parse a patrol map from disk.
pub fn read_grid(path: &Path) -> Result<Grid> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let grid = parse_grid(&text)?;
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Position;

    #[test]
    fn parse_accepts_the_full_alphabet() {
        let grid = parse_grid(".#^>\nv<..\n").expect("grid");
        assert_eq!(grid.dimensions(), (2, 4));
        assert_eq!(grid.cell_at(Position { row: 0, col: 0 }), Ok(Cell::Open));
        assert_eq!(
            grid.cell_at(Position { row: 0, col: 1 }),
            Ok(Cell::Obstacle)
        );
        assert_eq!(
            grid.cell_at(Position { row: 0, col: 2 }),
            Ok(Cell::Guard(Heading::Up))
        );
        assert_eq!(
            grid.cell_at(Position { row: 1, col: 0 }),
            Ok(Cell::Guard(Heading::Down))
        );
    }

    #[test]
    fn parse_rejects_unknown_symbols_with_their_location() {
        assert_eq!(
            parse_grid("..\n.X\n"),
            Err(GridError::UnknownSymbol {
                symbol: 'X',
                row: 1,
                col: 1,
            })
        );
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert_eq!(
            parse_grid("....\n...\n"),
            Err(GridError::MalformedGrid {
                row: 1,
                len: 3,
                expected: 4,
            })
        );
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(parse_grid(""), Err(GridError::EmptyGrid));
    }

    #[test]
    fn read_grid_reports_the_missing_path() {
        let err = read_grid(Path::new("no/such/map.txt")).expect_err("missing file");
        assert!(err.to_string().contains("no/such/map.txt"));
    }
}
