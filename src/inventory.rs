use std::collections::{BTreeSet, HashMap};

use itertools::Itertools;

use crate::types::{ItemId, ItemName, Itemset, RawTransaction, Transaction};

/// Interned item labels.
///
/// Ids are handed out in lexicographic order of the labels, so sorting an
/// itemset by id sorts it by label as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    names: Vec<String>,
    lookup: HashMap<String, ItemId>,
}

impl Inventory {
    pub fn from_transactions(raw_transactions: &[RawTransaction]) -> Self {
        let labels: BTreeSet<ItemName> = raw_transactions
            .iter()
            .flat_map(|raw_transaction| raw_transaction.iter().copied())
            .collect();

        let names: Vec<String> = labels.into_iter().map(str::to_owned).collect();
        let lookup = names
            .iter()
            .enumerate()
            .map(|(item_id, name)| (name.clone(), item_id))
            .collect();

        Self { names, lookup }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn id(&self, name: &str) -> Option<ItemId> {
        self.lookup.get(name).copied()
    }

    pub fn name(&self, item_id: ItemId) -> Option<&str> {
        self.names.get(item_id).map(String::as_str)
    }

    /// Canonical itemset for a list of labels, or `None` if any label is unknown.
    pub fn itemset<S: AsRef<str>>(&self, names: &[S]) -> Option<Itemset> {
        let mut itemset = names
            .iter()
            .map(|name| self.id(name.as_ref()))
            .collect::<Option<Itemset>>()?;
        itemset.sort_unstable();
        itemset.dedup();
        Some(itemset)
    }

    /// Labels of an itemset in canonical order. Ids must come from this inventory.
    pub fn names(&self, itemset: &[ItemId]) -> Vec<String> {
        itemset
            .iter()
            .map(|&item_id| self.names[item_id].clone())
            .collect()
    }

    /// `{a, b}` rendering used by the CLI.
    pub fn format_itemset(&self, itemset: &[ItemId]) -> String {
        format!(
            "{{{}}}",
            itemset.iter().map(|&item_id| &self.names[item_id]).join(", ")
        )
    }

    pub fn encode(&self, raw_transaction: &RawTransaction) -> Transaction {
        let mut items: Transaction = raw_transaction
            .iter()
            .filter_map(|&item| self.id(item))
            .collect();
        items.sort_unstable();
        items
    }
}
