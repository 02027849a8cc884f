//! Corrupted-memory instruction scanning.
//!
//! The input is a stream of junk with occasional well-formed `mul(a,b)`
//! instructions and, for the second answer, `do()`/`don't()` toggles that
//! enable and disable the multiplications that follow them.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

static MUL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"mul\((\d+),(\d+)\)").unwrap());

static INSTRUCTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"mul\((\d+),(\d+)\)|do\(\)|don't\(\)").unwrap());

/// Sum of products of every well-formed `mul(a,b)`.
pub fn sum_of_products(memory: &str) -> Result<i64> {
    let mut total = 0;
    for capture in MUL_RE.captures_iter(memory) {
        total += product(&capture[1], &capture[2])?;
    }
    Ok(total)
}

/// Like [`sum_of_products`], but `don't()` disables and `do()` re-enables
/// every multiplication that follows it.
pub fn sum_with_toggles(memory: &str) -> Result<i64> {
    let mut enabled = true;
    let mut total = 0;
    for capture in INSTRUCTION_RE.captures_iter(memory) {
        match &capture[0] {
            "do()" => enabled = true,
            "don't()" => enabled = false,
            _ if enabled => total += product(&capture[1], &capture[2])?,
            _ => {}
        }
    }
    Ok(total)
}

fn product(left: &str, right: &str) -> Result<i64> {
    let left: i64 = left.parse().context("parse left operand")?;
    let right: i64 = right.parse().context("parse right operand")?;
    Ok(left * right)
}
