//! Test-only helpers for constructing grids and map files.

use std::path::PathBuf;

use crate::core::grid::Grid;
use crate::io::input::parse_grid;

/// The 10×10 worked example map: 41 visited cells, 6 loop-inducing
/// obstruction sites.
pub const REFERENCE_MAP: &[&str] = &[
    "....#.....",
    ".........#",
    "..........",
    "..#.......",
    ".......#..",
    "..........",
    ".#..^.....",
    "........#.",
    "#.........",
    "......#...",
];

/// Parse a grid from string rows, panicking on invalid fixtures.
pub fn grid(rows: &[&str]) -> Grid {
    parse_grid(&rows.join("\n")).expect("valid fixture grid")
}

/// Write `rows` as a map file inside a fresh temp dir.
///
/// Returns the dir handle alongside the path; dropping the handle deletes
/// the file.
pub fn write_map(rows: &[&str]) -> anyhow::Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("map.txt");
    std::fs::write(&path, format!("{}\n", rows.join("\n")))?;
    Ok((dir, path))
}
