use std::collections::{BTreeMap, HashSet};

pub type ItemId = usize;
pub type ItemName<'l> = &'l str;

/// Sorted, duplicate-free item ids. The sort order doubles as the canonical
/// form used for equality and ordering.
pub type Itemset = Vec<ItemId>;

pub type RawTransaction<'l> = HashSet<ItemName<'l>>;
pub type Transaction = Vec<ItemId>;

pub type ItemCounts = BTreeMap<ItemId, u32>;
pub type ItemsetCounts = BTreeMap<Itemset, u32>;

pub type ItemsetLength = usize;
pub type FrequentItemsets = BTreeMap<ItemsetLength, ItemsetCounts>;
