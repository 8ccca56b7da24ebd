use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::{
    combi::generate_candidates,
    error::Result,
    inventory::Inventory,
    itemsets::table::check_level,
    types::{
        FrequentItemsets, ItemCounts, ItemId, Itemset, ItemsetCounts, ItemsetLength,
        RawTransaction, Transaction,
    },
};

/// `ceil(min_support_percent / 100 * num_transactions)`.
///
/// Multiplied before dividing so that whole percentages stay exact.
pub fn min_support_count(min_support_percent: f64, num_transactions: usize) -> u32 {
    (min_support_percent * num_transactions as f64 / 100.0).ceil() as u32
}

/// Generate frequent itemsets from a list of transactions.
///
/// Levels are computed until one comes out empty (or `max_len` is reached).
/// Empty levels are never stored.
pub fn generate_frequent_itemsets(
    raw_transactions: &[RawTransaction],
    min_support_count: u32,
    max_len: Option<ItemsetLength>,
) -> Result<(FrequentItemsets, Inventory)> {
    let inventory = Inventory::from_transactions(raw_transactions);
    let mut transactions: Vec<Transaction> = raw_transactions
        .iter()
        .map(|raw_transaction| inventory.encode(raw_transaction))
        .collect();

    let mut all_frequent_itemsets = FrequentItemsets::new();

    // 1-itemset
    debug!(size = 1, "counting itemsets");
    let item_counts = generate_frequent_1_itemset_counts(&transactions, min_support_count);
    if item_counts.is_empty() {
        info!(levels = 0, "no frequent items");
        return Ok((all_frequent_itemsets, inventory));
    }
    all_frequent_itemsets.insert(1, convert_to_itemset_counts(item_counts));

    // k-itemset, k >= 2
    let mut size = 2;
    while max_len.map_or(true, |max_len| size <= max_len) {
        let candidates = generate_candidates(&all_frequent_itemsets[&(size - 1)])?;
        if candidates.is_empty() {
            debug!(size, "no candidates left");
            break;
        }

        // shorter transactions cannot contain any candidate
        transactions.retain(|transaction| transaction.len() >= size);

        debug!(size, candidates = candidates.len(), "counting itemsets");
        let frequent_itemset_counts =
            generate_frequent_k_itemset_counts(&candidates, &transactions, min_support_count);
        if frequent_itemset_counts.is_empty() {
            debug!(size, "no frequent itemsets");
            break;
        }

        check_level(&all_frequent_itemsets[&(size - 1)], &frequent_itemset_counts)?;
        debug!(size, frequent = frequent_itemset_counts.len(), "level done");
        all_frequent_itemsets.insert(size, frequent_itemset_counts);
        size += 1;
    }

    info!(
        transactions = raw_transactions.len(),
        items = inventory.len(),
        levels = all_frequent_itemsets.len(),
        "mined frequent itemsets"
    );

    Ok((all_frequent_itemsets, inventory))
}

/// Count candidates and keep those at or above `min_support_count`.
pub fn generate_frequent_k_itemset_counts(
    candidates: &BTreeSet<Itemset>,
    transactions: &[Transaction],
    min_support_count: u32,
) -> ItemsetCounts {
    let mut candidate_counts = count_candidates(transactions, candidates);
    candidate_counts.retain(|_, &mut support_count| support_count >= min_support_count);
    candidate_counts
}

/// Number of transactions containing each candidate. Candidates found in no
/// transaction get no entry.
pub fn count_candidates(
    transactions: &[Transaction],
    candidates: &BTreeSet<Itemset>,
) -> ItemsetCounts {
    let mut candidate_counts = ItemsetCounts::new();

    for transaction in transactions {
        for candidate in candidates {
            if is_subset(candidate, transaction) {
                *candidate_counts.entry(candidate.clone()).or_insert(0) += 1;
            }
        }
    }

    candidate_counts
}

/// Linear merge over two ascending id sequences.
pub fn is_subset(candidate: &[ItemId], transaction: &[ItemId]) -> bool {
    let mut transaction = transaction.iter();
    candidate
        .iter()
        .all(|item| transaction.by_ref().any(|other| other == item))
}

/// 1-itemset
pub fn generate_frequent_1_itemset_counts(
    transactions: &[Transaction],
    min_support_count: u32,
) -> ItemCounts {
    let mut item_counts = ItemCounts::new();

    for transaction in transactions {
        for &item in transaction {
            *item_counts.entry(item).or_insert(0) += 1;
        }
    }

    // Prune
    item_counts.retain(|_, &mut support_count| support_count >= min_support_count);

    item_counts
}

fn convert_to_itemset_counts(item_counts: ItemCounts) -> ItemsetCounts {
    item_counts.into_iter().map(|(k, v)| (vec![k], v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::{btreemap, btreeset, hashset};

    const A: &str = "Item A";
    const B: &str = "Item B";
    const C: &str = "Item C";
    const D: &str = "Item D";

    macro_rules! sorted_vec {
        ($($x:expr),*) => {
            {
                let mut vec: Itemset = Vec::with_capacity(5);
                $(vec.push($x);)*
                vec.sort_unstable();
                vec
            }
        };
    }

    #[test]
    fn update_counts() {
        let transactions = vec![vec![0, 1]];
        let candidates = btreeset! {vec![0], vec![1]};

        let frequent_itemsets = generate_frequent_k_itemset_counts(&candidates, &transactions, 0);

        assert_eq!(frequent_itemsets, btreemap! { vec![0] => 1, vec![1] => 1 });
    }

    #[test]
    fn update_counts_with_min_support_1() {
        let transactions = vec![vec![10, 11], vec![10, 12]];
        let candidates = btreeset! {vec![10], vec![11]};

        let frequent_itemsets = generate_frequent_k_itemset_counts(&candidates, &transactions, 2);

        assert_eq!(frequent_itemsets, btreemap! {vec![10] => 2})
    }

    #[test]
    fn update_counts_with_min_support_0_5_2_itemset() {
        let transactions = vec![
            vec![10, 11],
            vec![10, 15],
            vec![10, 13],
            vec![10, 13],
            vec![10, 13],
            vec![11, 13],
        ];
        let candidates = btreeset! {
            vec![10, 11],
            vec![10, 13],
            vec![10, 15],
            vec![11, 13],
            vec![11, 15],
        };
        let frequent_itemsets = generate_frequent_k_itemset_counts(&candidates, &transactions, 3);
        assert_eq!(frequent_itemsets, btreemap! { vec![10, 13] => 3});
    }

    #[test]
    fn count_candidates_skips_absent_candidates() {
        let transactions = vec![vec![10, 11, 13], vec![10]];
        let candidates = btreeset! {vec![10, 11], vec![11, 12]};

        let counts = count_candidates(&transactions, &candidates);
        assert_eq!(counts, btreemap! { vec![10, 11] => 1 });
    }

    #[test]
    fn zero_min_support_keeps_only_observed_itemsets() {
        let transactions = vec![hashset![A], hashset![B], hashset![C]];
        let (frequent_itemsets, inventory) =
            generate_frequent_itemsets(&transactions, 0, None).unwrap();
        let id = |name: &str| inventory.id(name).unwrap();

        let expected = btreemap! {
            1 => btreemap! {
                vec![id(A)] => 1,
                vec![id(B)] => 1,
                vec![id(C)] => 1,
            },
        };
        assert_eq!(frequent_itemsets, expected);
    }

    #[test]
    fn subset_by_linear_merge() {
        assert!(is_subset(&[1, 3], &[0, 1, 2, 3]));
        assert!(is_subset(&[], &[0, 1]));
        assert!(!is_subset(&[1, 4], &[0, 1, 2, 3]));
        assert!(!is_subset(&[0, 1], &[1]));
        assert!(!is_subset(&[2, 1], &[1, 2]));
    }

    #[test]
    fn min_support_count_rounds_up() {
        assert_eq!(min_support_count(50.0, 4), 2);
        assert_eq!(min_support_count(40.0, 5), 2);
        assert_eq!(min_support_count(41.0, 5), 3);
        assert_eq!(min_support_count(7.0, 100), 7);
        assert_eq!(min_support_count(0.0, 10), 0);
        assert_eq!(min_support_count(100.0, 3), 3);
    }

    #[test]
    fn frequent_1_itemsets_with_min_support() {
        let transactions = vec![vec![0, 1, 2], vec![0], vec![1], vec![0, 2]];
        let item_counts = generate_frequent_1_itemset_counts(&transactions, 2);

        assert_eq!(item_counts, btreemap! { 0 => 3, 1 => 2, 2 => 2 });
    }

    #[test]
    fn test_generate_frequent_itemsets_low_minsupport() {
        let transactions = vec![
            hashset![A, B],
            hashset![A, C],
            hashset![A, B, C],
            hashset![B, D],
        ];
        let (frequent_itemsets, inventory) =
            generate_frequent_itemsets(&transactions, 1, None).unwrap();
        let id = |name: &str| inventory.id(name).unwrap();

        let expected = btreemap! {
            1 => btreemap! {
                vec![id(A)] => 3,
                vec![id(B)] => 3,
                vec![id(C)] => 2,
                vec![id(D)] => 1,
            },
            2 => btreemap! {
                sorted_vec![id(A), id(B)] => 2,
                sorted_vec![id(A), id(C)] => 2,
                sorted_vec![id(B), id(C)] => 1,
                sorted_vec![id(B), id(D)] => 1,
            },
            3 => btreemap! {
                sorted_vec![id(A), id(B), id(C)] => 1,
            },
        };

        assert_eq!(frequent_itemsets, expected);
    }

    #[test]
    fn test_generate_frequent_itemsets_half_minsupport() {
        let transactions = vec![
            hashset![A, B],
            hashset![A, C],
            hashset![A, B, C],
            hashset![B, D],
        ];
        let (frequent_itemsets, inventory) =
            generate_frequent_itemsets(&transactions, 2, None).unwrap();
        let id = |name: &str| inventory.id(name).unwrap();

        // {A, B, C} is not even a candidate: {B, C} is infrequent
        let expected = btreemap! {
            1 => btreemap! {
                vec![id(A)] => 3,
                vec![id(B)] => 3,
                vec![id(C)] => 2,
            },
            2 => btreemap! {
                sorted_vec![id(A), id(B)] => 2,
                sorted_vec![id(A), id(C)] => 2,
            },
        };

        assert_eq!(frequent_itemsets, expected);
    }

    #[test]
    fn test_generate_frequent_itemsets_max_len() {
        let transactions = vec![hashset![A, B, C], hashset![A, B, C]];
        let (frequent_itemsets, _) =
            generate_frequent_itemsets(&transactions, 1, Some(2)).unwrap();

        assert_eq!(frequent_itemsets.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_generate_frequent_itemsets_empty() {
        let transactions: Vec<RawTransaction> = vec![];
        let (frequent_itemsets, inventory) =
            generate_frequent_itemsets(&transactions, 1, None).unwrap();

        assert!(frequent_itemsets.is_empty());
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_generate_frequent_itemsets_threshold_above_all_counts() {
        let transactions = vec![hashset![A, B], hashset![A]];
        let (frequent_itemsets, _) = generate_frequent_itemsets(&transactions, 3, None).unwrap();

        assert!(frequent_itemsets.is_empty());
    }
}
