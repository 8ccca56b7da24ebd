use std::collections::BTreeSet;

use itertools::Itertools;

use crate::{
    error::{AprioriError, Result},
    types::{ItemId, Itemset, ItemsetCounts, ItemsetLength},
};

/// Candidates of length k from the frequent itemsets of length k - 1.
///
/// Every unordered pair of frequent itemsets is joined; unions that are not
/// exactly one item longer are dropped. A union survives only if all of its
/// (k - 1)-subsets are frequent.
pub fn generate_candidates(prev_itemset_counts: &ItemsetCounts) -> Result<BTreeSet<Itemset>> {
    let prev_size = match prev_itemset_counts.keys().next() {
        Some(itemset) => itemset.len(),
        None => return Ok(BTreeSet::new()),
    };
    check_uniform_length(prev_itemset_counts, prev_size)?;

    let size = prev_size + 1;
    let candidates = join_step(prev_itemset_counts, size)
        .into_iter()
        .filter(|candidate| has_frequent_subsets(candidate, prev_itemset_counts))
        .collect();

    Ok(candidates)
}

fn check_uniform_length(itemset_counts: &ItemsetCounts, expected: ItemsetLength) -> Result<()> {
    match itemset_counts.keys().find(|itemset| itemset.len() != expected) {
        Some(itemset) => Err(AprioriError::InconsistentItemsetLength {
            itemset: itemset.clone(),
            expected,
            found: itemset.len(),
        }),
        None => Ok(()),
    }
}

/// Unions of every pair of itemsets whose union has exactly `size` items.
pub fn join_step(itemset_counts: &ItemsetCounts, size: ItemsetLength) -> BTreeSet<Itemset> {
    itemset_counts
        .keys()
        .tuple_combinations()
        .map(|(a, b)| union(a, b))
        .filter(|combined| combined.len() == size)
        .collect()
}

/// Apriori pruning: all subsets one item shorter must be frequent.
pub fn has_frequent_subsets(candidate: &[ItemId], prev_itemset_counts: &ItemsetCounts) -> bool {
    candidate
        .iter()
        .copied()
        .combinations(candidate.len() - 1)
        .all(|subset| prev_itemset_counts.contains_key(&subset))
}

fn union(a: &[ItemId], b: &[ItemId]) -> Itemset {
    a.iter().merge(b.iter()).dedup().copied().collect()
}
