//! Letter-grid scanning: straight-line word counting and X-shaped crosses.

/// All eight scan directions as (row step, column step).
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count every straight-line occurrence of `word`, in all eight directions.
///
/// Occurrences starting at the same cell in different directions count
/// separately.
pub fn count_word(grid: &[Vec<char>], word: &str) -> usize {
    let letters: Vec<char> = word.chars().collect();
    if letters.is_empty() {
        return 0;
    }
    let mut count = 0;
    for row in 0..grid.len() {
        for col in 0..grid[row].len() {
            for (row_step, col_step) in DIRECTIONS {
                if matches_direction(grid, &letters, row as isize, col as isize, row_step, col_step)
                {
                    count += 1;
                }
            }
        }
    }
    count
}

/// Count 3×3 crosses whose two diagonals both read `MAS` or `SAM` through a
/// shared center `A`.
pub fn count_cross_shapes(grid: &[Vec<char>]) -> usize {
    let mut count = 0;
    for row in 0..grid.len() {
        for col in 0..grid[row].len() {
            let (row, col) = (row as isize, col as isize);
            if at(grid, row, col) != Some('A') {
                continue;
            }
            let down_right = [
                at(grid, row - 1, col - 1),
                Some('A'),
                at(grid, row + 1, col + 1),
            ];
            let down_left = [
                at(grid, row - 1, col + 1),
                Some('A'),
                at(grid, row + 1, col - 1),
            ];
            if is_mas(down_right) && is_mas(down_left) {
                count += 1;
            }
        }
    }
    count
}

fn matches_direction(
    grid: &[Vec<char>],
    letters: &[char],
    row: isize,
    col: isize,
    row_step: isize,
    col_step: isize,
) -> bool {
    letters.iter().enumerate().all(|(offset, letter)| {
        let offset = offset as isize;
        at(grid, row + row_step * offset, col + col_step * offset) == Some(*letter)
    })
}

fn at(grid: &[Vec<char>], row: isize, col: isize) -> Option<char> {
    if row < 0 || col < 0 {
        return None;
    }
    grid.get(row as usize)?.get(col as usize).copied()
}

fn is_mas(diagonal: [Option<char>; 3]) -> bool {
    matches!(
        diagonal,
        [Some('M'), Some('A'), Some('S')] | [Some('S'), Some('A'), Some('M')]
    )
}
