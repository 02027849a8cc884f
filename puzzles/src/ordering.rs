//! Ordering rules over page updates: validation and topological repair.

use std::collections::{HashMap, HashSet, VecDeque};

use anyhow::{Result, bail};

/// A `before|after` ordering rule.
pub type Rule = (u32, u32);

/// True when no applicable rule is violated by the update's page order.
///
/// Rules naming a page absent from the update do not apply to it.
pub fn is_correctly_ordered(rules: &[Rule], update: &[u32]) -> bool {
    let index_of: HashMap<u32, usize> = update
        .iter()
        .enumerate()
        .map(|(index, page)| (*page, index))
        .collect();
    rules.iter().all(|(before, after)| {
        match (index_of.get(before), index_of.get(after)) {
            (Some(before), Some(after)) => before < after,
            _ => true,
        }
    })
}

/// Middle page of an update. Updates have odd length in practice; for even
/// lengths this is the later of the two central pages.
pub fn middle_page(update: &[u32]) -> u32 {
    update[update.len() / 2]
}

/// Sum of middle pages over the already-correct updates.
pub fn sum_of_correct_middles(rules: &[Rule], updates: &[Vec<u32>]) -> u32 {
    updates
        .iter()
        .filter(|update| is_correctly_ordered(rules, update))
        .map(|update| middle_page(update))
        .sum()
}

/// Reorder an update so every applicable rule holds, via Kahn's algorithm
/// over the rules restricted to the update's pages.
///
/// Ties are broken by original update order, keeping the result
/// deterministic. Fails if the applicable rules contain a cycle.
pub fn reorder(rules: &[Rule], update: &[u32]) -> Result<Vec<u32>> {
    let pages: HashSet<u32> = update.iter().copied().collect();
    let mut successors: HashMap<u32, Vec<u32>> = HashMap::new();
    let mut in_degree: HashMap<u32, u32> = update.iter().map(|page| (*page, 0)).collect();
    let mut edges = HashSet::new();
    for &(before, after) in rules {
        if pages.contains(&before) && pages.contains(&after) && edges.insert((before, after)) {
            successors.entry(before).or_default().push(after);
            *in_degree.entry(after).or_insert(0) += 1;
        }
    }

    let mut queue: VecDeque<u32> = update
        .iter()
        .copied()
        .filter(|page| in_degree[page] == 0)
        .collect();
    let mut sorted = Vec::with_capacity(update.len());
    while let Some(page) = queue.pop_front() {
        sorted.push(page);
        for successor in successors.get(&page).into_iter().flatten() {
            let degree = in_degree.get_mut(successor).expect("known page");
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(*successor);
            }
        }
    }

    if sorted.len() != update.len() {
        bail!("cycle in ordering rules for update {:?}", update);
    }
    Ok(sorted)
}

/// Sum of middle pages after repairing the incorrectly ordered updates.
pub fn sum_of_reordered_middles(rules: &[Rule], updates: &[Vec<u32>]) -> Result<u32> {
    let mut total = 0;
    for update in updates {
        if is_correctly_ordered(rules, update) {
            continue;
        }
        let repaired = reorder(rules, update)?;
        total += middle_page(&repaired);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rules() -> Vec<Rule> {
        vec![
            (47, 53),
            (97, 13),
            (97, 61),
            (97, 47),
            (75, 29),
            (61, 13),
            (75, 53),
            (29, 13),
            (97, 29),
            (53, 29),
            (61, 53),
            (97, 53),
            (61, 29),
            (47, 13),
            (75, 47),
            (97, 75),
            (47, 61),
            (75, 61),
            (47, 29),
            (75, 13),
            (53, 13),
        ]
    }

    fn sample_updates() -> Vec<Vec<u32>> {
        vec![
            vec![75, 47, 61, 53, 29],
            vec![97, 61, 53, 29, 13],
            vec![75, 29, 13],
            vec![75, 97, 47, 61, 53],
            vec![61, 13, 29],
            vec![97, 13, 75, 29, 47],
        ]
    }

    #[test]
    fn first_three_sample_updates_are_correct() {
        let rules = sample_rules();
        let updates = sample_updates();
        for update in &updates[..3] {
            assert!(is_correctly_ordered(&rules, update), "{update:?}");
        }
        for update in &updates[3..] {
            assert!(!is_correctly_ordered(&rules, update), "{update:?}");
        }
    }

    #[test]
    fn correct_middles_sum_to_143() {
        assert_eq!(sum_of_correct_middles(&sample_rules(), &sample_updates()), 143);
    }

    #[test]
    fn reorder_repairs_each_incorrect_update() {
        let rules = sample_rules();
        assert_eq!(
            reorder(&rules, &[75, 97, 47, 61, 53]).expect("reorder"),
            vec![97, 75, 47, 61, 53]
        );
        assert_eq!(
            reorder(&rules, &[61, 13, 29]).expect("reorder"),
            vec![61, 29, 13]
        );
        assert_eq!(
            reorder(&rules, &[97, 13, 75, 29, 47]).expect("reorder"),
            vec![97, 75, 47, 29, 13]
        );
    }

    #[test]
    fn reordered_middles_sum_to_123() {
        let total =
            sum_of_reordered_middles(&sample_rules(), &sample_updates()).expect("reorder");
        assert_eq!(total, 123);
    }

    #[test]
    fn cyclic_rules_fail_instead_of_looping() {
        let rules = vec![(1, 2), (2, 3), (3, 1)];
        assert!(reorder(&rules, &[1, 2, 3]).is_err());
    }
}
