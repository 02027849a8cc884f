//! Report safety: strictly monotonic levels with bounded step size.

/// True when the levels are all increasing or all decreasing and every
/// adjacent step is between 1 and 3.
pub fn is_safe(levels: &[i64]) -> bool {
    let increasing = levels.windows(2).all(|pair| pair[0] < pair[1]);
    let decreasing = levels.windows(2).all(|pair| pair[0] > pair[1]);
    let bounded = levels
        .windows(2)
        .all(|pair| (1..=3).contains(&(pair[0] - pair[1]).abs()));
    (increasing || decreasing) && bounded
}

/// Like [`is_safe`], but also accepts a report that becomes safe after
/// removing any single level.
pub fn is_safe_with_dampener(levels: &[i64]) -> bool {
    if is_safe(levels) {
        return true;
    }
    (0..levels.len()).any(|skip| {
        let mut reduced = levels.to_vec();
        reduced.remove(skip);
        is_safe(&reduced)
    })
}

pub fn count_safe(reports: &[Vec<i64>]) -> usize {
    reports.iter().filter(|levels| is_safe(levels)).count()
}

pub fn count_safe_with_dampener(reports: &[Vec<i64>]) -> usize {
    reports
        .iter()
        .filter(|levels| is_safe_with_dampener(levels))
        .count()
}
