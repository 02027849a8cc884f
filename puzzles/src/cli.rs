//! CLI command implementations: input parsing and result printing.
//!
//! Each command reads one input file, hands the parsed data to its pure
//! solver module, and prints the answers as labeled lines on stdout.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::calibration::{self, Equation, OperatorSet};
use crate::distance;
use crate::instructions;
use crate::ordering::{self, Rule};
use crate::reports;
use crate::wordsearch;

/// Pairwise list distance and similarity score.
pub fn run_distance(input: &Path) -> Result<()> {
    let text = read_input(input)?;
    let (left, right) = parse_columns(&text)?;
    debug!(pairs = left.len(), "columns parsed");
    println!("total distance: {}", distance::total_distance(&left, &right));
    println!(
        "similarity score: {}",
        distance::similarity_score(&left, &right)
    );
    Ok(())
}

/// Safe report counting, with and without the dampener.
pub fn run_reports(input: &Path) -> Result<()> {
    let text = read_input(input)?;
    let all = parse_reports(&text)?;
    debug!(reports = all.len(), "reports parsed");
    println!("safe: {}", reports::count_safe(&all));
    println!(
        "safe with dampener: {}",
        reports::count_safe_with_dampener(&all)
    );
    Ok(())
}

/// Multiplication-instruction scanning over corrupted memory.
pub fn run_instructions(input: &Path) -> Result<()> {
    let memory = read_input(input)?;
    println!("sum of products: {}", instructions::sum_of_products(&memory)?);
    println!(
        "sum with toggles: {}",
        instructions::sum_with_toggles(&memory)?
    );
    Ok(())
}

/// Word and cross counting over a letter grid.
pub fn run_wordsearch(input: &Path, word: &str) -> Result<()> {
    let text = read_input(input)?;
    let grid = parse_letter_grid(&text);
    debug!(rows = grid.len(), word, "letter grid parsed");
    println!("words: {}", wordsearch::count_word(&grid, word));
    println!("crosses: {}", wordsearch::count_cross_shapes(&grid));
    Ok(())
}

/// Page-update validation and topological repair.
pub fn run_ordering(input: &Path) -> Result<()> {
    let text = read_input(input)?;
    let (rules, updates) = parse_rules_and_updates(&text)?;
    debug!(rules = rules.len(), updates = updates.len(), "sections parsed");
    println!(
        "correct middles: {}",
        ordering::sum_of_correct_middles(&rules, &updates)
    );
    println!(
        "reordered middles: {}",
        ordering::sum_of_reordered_middles(&rules, &updates)?
    );
    Ok(())
}

/// Calibration equation solving with both operator sets.
pub fn run_calibration(input: &Path) -> Result<()> {
    let text = read_input(input)?;
    let equations = parse_equations(&text)?;
    debug!(equations = equations.len(), "equations parsed");
    println!(
        "add/mul total: {}",
        calibration::total_calibration(&equations, OperatorSet::AddMul)
    );
    println!(
        "with concatenation: {}",
        calibration::total_calibration(&equations, OperatorSet::AddMulConcat)
    );
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// Parse two whitespace-separated integer columns.
fn parse_columns(text: &str) -> Result<(Vec<i64>, Vec<i64>)> {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for (number, line) in non_empty_lines(text) {
        let mut fields = line.split_whitespace();
        let (Some(first), Some(second), None) = (fields.next(), fields.next(), fields.next())
        else {
            bail!("line {}: expected two columns, got '{}'", number, line);
        };
        left.push(parse_int(first, number)?);
        right.push(parse_int(second, number)?);
    }
    Ok((left, right))
}

/// Parse one whitespace-separated integer report per line.
fn parse_reports(text: &str) -> Result<Vec<Vec<i64>>> {
    let mut all = Vec::new();
    for (number, line) in non_empty_lines(text) {
        let levels = line
            .split_whitespace()
            .map(|field| parse_int(field, number))
            .collect::<Result<Vec<i64>>>()?;
        all.push(levels);
    }
    Ok(all)
}

/// Split a text block into rows of characters, skipping blank lines.
fn parse_letter_grid(text: &str) -> Vec<Vec<char>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().collect())
        .collect()
}

/// Parse the `before|after` rule section and the comma-separated update
/// section, split by the first blank line.
fn parse_rules_and_updates(text: &str) -> Result<(Vec<Rule>, Vec<Vec<u32>>)> {
    let mut rules = Vec::new();
    let mut updates = Vec::new();
    let mut in_updates = false;
    for (number, line) in text.lines().enumerate().map(|(index, line)| (index + 1, line.trim())) {
        if line.is_empty() {
            in_updates = true;
            continue;
        }
        if !in_updates {
            let (before, after) = line
                .split_once('|')
                .with_context(|| format!("line {}: expected 'before|after', got '{}'", number, line))?;
            rules.push((
                parse_page(before, number)?,
                parse_page(after, number)?,
            ));
        } else {
            let update = line
                .split(',')
                .map(|page| parse_page(page, number))
                .collect::<Result<Vec<u32>>>()?;
            updates.push(update);
        }
    }
    Ok((rules, updates))
}

/// Parse `target: operand operand ...` lines.
fn parse_equations(text: &str) -> Result<Vec<Equation>> {
    let mut equations = Vec::new();
    for (number, line) in non_empty_lines(text) {
        let (target, operands) = line
            .split_once(':')
            .with_context(|| format!("line {}: expected 'target: operands', got '{}'", number, line))?;
        let target = target
            .trim()
            .parse()
            .with_context(|| format!("line {}: parse target '{}'", number, target.trim()))?;
        let operands = operands
            .split_whitespace()
            .map(|field| {
                field
                    .parse()
                    .with_context(|| format!("line {}: parse operand '{}'", number, field))
            })
            .collect::<Result<Vec<u64>>>()?;
        equations.push(Equation { target, operands });
    }
    Ok(equations)
}

fn non_empty_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn parse_int(field: &str, line: usize) -> Result<i64> {
    field
        .parse()
        .with_context(|| format!("line {}: parse integer '{}'", line, field))
}

fn parse_page(field: &str, line: usize) -> Result<u32> {
    field
        .trim()
        .parse()
        .with_context(|| format!("line {}: parse page '{}'", line, field.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_columns_accepts_aligned_pairs() {
        let (left, right) = parse_columns("3 4\n4 3\n2 5\n").expect("parse");
        assert_eq!(left, vec![3, 4, 2]);
        assert_eq!(right, vec![4, 3, 5]);
    }

    #[test]
    fn parse_columns_rejects_a_short_line() {
        let err = parse_columns("3 4\n7\n").expect_err("short line");
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn parse_reports_keeps_one_report_per_line() {
        let all = parse_reports("7 6 4 2 1\n1 2 7 8 9\n").expect("parse");
        assert_eq!(all, vec![vec![7, 6, 4, 2, 1], vec![1, 2, 7, 8, 9]]);
    }

    #[test]
    fn parse_rules_and_updates_splits_on_the_blank_line() {
        let (rules, updates) = parse_rules_and_updates("47|53\n97|13\n\n75,47,61\n").expect("parse");
        assert_eq!(rules, vec![(47, 53), (97, 13)]);
        assert_eq!(updates, vec![vec![75, 47, 61]]);
    }

    #[test]
    fn parse_equations_reads_target_and_operands() {
        let equations = parse_equations("190: 10 19\n3267: 81 40 27\n").expect("parse");
        assert_eq!(
            equations[0],
            Equation {
                target: 190,
                operands: vec![10, 19],
            }
        );
        assert_eq!(equations.len(), 2);
    }

    #[test]
    fn read_input_round_trips_a_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "3 4\n").expect("write");
        assert_eq!(read_input(&path).expect("read"), "3 4\n");
    }
}
