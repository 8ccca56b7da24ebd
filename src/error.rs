use crate::types::{Itemset, ItemsetLength};

pub type Result<T> = std::result::Result<T, AprioriError>;

/// Errors raised while mining itemsets, deriving rules or reading input.
#[derive(Debug, thiserror::Error)]
pub enum AprioriError {
    #[error("{name} must be a percentage in [0, 100], got {value}")]
    InvalidPercentage { name: &'static str, value: f64 },

    #[error("max_len must be at least 1")]
    InvalidMaxLen,

    #[error("transaction count must be positive, got {0}")]
    InvalidTransactionCount(i64),

    #[error("itemset {itemset:?} has length {found}, expected {expected}")]
    InconsistentItemsetLength {
        itemset: Itemset,
        expected: ItemsetLength,
        found: ItemsetLength,
    },

    #[error("frequent itemset {itemset:?} has infrequent subset {subset:?}")]
    MissingSubset { itemset: Itemset, subset: Itemset },

    #[error("no support recorded for antecedent {antecedent:?} of {itemset:?}")]
    MissingAntecedentSupport { itemset: Itemset, antecedent: Itemset },

    #[error("itemset of length {0} is too large to partition into rules")]
    ItemsetTooLarge(ItemsetLength),

    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
