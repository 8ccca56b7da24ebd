use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::{
    error::{AprioriError, Result},
    inventory::Inventory,
    types::{FrequentItemsets, ItemsetCounts, ItemsetLength},
};

/// Frequent itemsets of every level together with the labels they refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentTable {
    pub(crate) levels: FrequentItemsets,
    pub(crate) inventory: Inventory,
    pub(crate) num_transactions: usize,
}

impl FrequentTable {
    pub fn new(levels: FrequentItemsets, inventory: Inventory, num_transactions: usize) -> Self {
        Self {
            levels,
            inventory,
            num_transactions,
        }
    }

    pub fn levels(&self) -> &FrequentItemsets {
        &self.levels
    }

    pub fn level(&self, size: ItemsetLength) -> Option<&ItemsetCounts> {
        self.levels.get(&size)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    /// Last populated level, 0 if nothing is frequent.
    pub fn max_level(&self) -> ItemsetLength {
        self.levels.keys().next_back().copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Total number of frequent itemsets across all levels.
    pub fn len(&self) -> usize {
        self.levels.values().map(|itemset_counts| itemset_counts.len()).sum()
    }

    /// Support count of a frequent itemset given by its labels, in any order.
    pub fn support<S: AsRef<str>>(&self, names: &[S]) -> Option<u32> {
        let itemset = self.inventory.itemset(names)?;
        self.levels.get(&itemset.len())?.get(&itemset).copied()
    }

    /// Labelled itemsets with their supports, levels ascending.
    pub fn named_itemsets(&self) -> impl Iterator<Item = (Vec<String>, u32)> + '_ {
        self.levels.values().flat_map(move |itemset_counts| {
            itemset_counts
                .iter()
                .map(move |(itemset, &count)| (self.inventory.names(itemset), count))
        })
    }

    /// Verify that every level holds itemsets of its own length and is
    /// downward closed over the level below it.
    pub fn check_downward_closure(&self) -> Result<()> {
        for (&size, itemset_counts) in &self.levels {
            if let Some(itemset) = itemset_counts.keys().find(|itemset| itemset.len() != size) {
                return Err(AprioriError::InconsistentItemsetLength {
                    itemset: itemset.clone(),
                    expected: size,
                    found: itemset.len(),
                });
            }
            let prev = size
                .checked_sub(1)
                .and_then(|prev_size| self.levels.get(&prev_size));
            if let Some(prev) = prev {
                check_level(prev, itemset_counts)?;
            }
        }
        Ok(())
    }
}

impl Display for FrequentTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (size, itemset_counts) in &self.levels {
            writeln!(f, "L{}:", size)?;
            for (itemset, count) in itemset_counts {
                writeln!(f, "  {}: {}", self.inventory.format_itemset(itemset), count)?;
            }
        }
        Ok(())
    }
}

/// Every itemset in `level` must have all its one-shorter subsets in `prev`.
pub fn check_level(prev: &ItemsetCounts, level: &ItemsetCounts) -> Result<()> {
    for itemset in level.keys() {
        let subset_len = match itemset.len().checked_sub(1) {
            Some(subset_len) => subset_len,
            None => {
                return Err(AprioriError::InconsistentItemsetLength {
                    itemset: itemset.clone(),
                    expected: prev.keys().next().map_or(2, |subset| subset.len() + 1),
                    found: itemset.len(),
                })
            }
        };
        let missing = itemset
            .iter()
            .copied()
            .combinations(subset_len)
            .find(|subset| !prev.contains_key(subset));

        if let Some(subset) = missing {
            return Err(AprioriError::MissingSubset {
                itemset: itemset.clone(),
                subset,
            });
        }
    }
    Ok(())
}
