//! Frequent itemset mining and association rules with the Apriori algorithm.
//!
//! ```
//! use maplit::hashset;
//!
//! let transactions = vec![
//!     hashset! {"Milk", "Bread"},
//!     hashset! {"Bread", "Diaper"},
//!     hashset! {"Milk", "Bread", "Diaper"},
//!     hashset! {"Milk", "Diaper"},
//! ];
//! let table = apriori::mine(&transactions, 2).unwrap();
//! assert_eq!(table.support(&["Bread", "Milk"]), Some(2));
//!
//! let rules = apriori::generate_rules(&table, 0.6).unwrap();
//! assert_eq!(rules.len(), 6);
//! ```

pub mod combi;
pub mod config;
pub mod error;
pub mod input;
pub mod inventory;
pub mod itemsets;
pub mod rules;
pub mod types;

#[cfg(feature = "python")]
mod wrapper;

pub use config::MiningConfig;
pub use error::{AprioriError, Result};
pub use inventory::Inventory;
pub use itemsets::table::FrequentTable;
pub use rules::rule::{AssociationRule, Rule};

use itemsets::count::generate_frequent_itemsets;
use types::{ItemsetLength, RawTransaction};

/// Mine every frequent itemset with at least `min_support_count` occurrences.
pub fn mine(transactions: &[RawTransaction], min_support_count: u32) -> Result<FrequentTable> {
    mine_with(transactions, min_support_count, None)
}

/// Like [`mine`], stopping after itemsets of length `max_len`.
pub fn mine_with(
    transactions: &[RawTransaction],
    min_support_count: u32,
    max_len: Option<ItemsetLength>,
) -> Result<FrequentTable> {
    let (levels, inventory) =
        generate_frequent_itemsets(transactions, min_support_count, max_len)?;
    Ok(FrequentTable::new(levels, inventory, transactions.len()))
}

/// Association rules with confidence of at least `min_confidence` (a fraction).
pub fn generate_rules(table: &FrequentTable, min_confidence: f64) -> Result<Vec<AssociationRule>> {
    let rules = rules::search::generate_rules(table.levels(), min_confidence)?;
    Ok(rules
        .iter()
        .map(|rule| rule.named(table.inventory()))
        .collect())
}

/// Mine and derive rules with percentage thresholds from a [`MiningConfig`].
pub fn run(
    transactions: &[RawTransaction],
    config: &MiningConfig,
) -> Result<(FrequentTable, Vec<AssociationRule>)> {
    config.validate()?;
    let min_support_count = config.min_support_count(transactions.len());
    let table = mine_with(transactions, min_support_count, config.max_len)?;
    let rules = generate_rules(&table, config.min_confidence())?;
    Ok((table, rules))
}
