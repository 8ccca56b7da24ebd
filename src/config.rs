use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{AprioriError, Result},
    itemsets::count::min_support_count,
    types::ItemsetLength,
};

pub mod defaults {
    pub const DEFAULT_MIN_SUPPORT_PERCENT: f64 = 50.0;
    pub const DEFAULT_MIN_CONFIDENCE_PERCENT: f64 = 60.0;
}

/// Mining thresholds. Percentages are in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    pub min_support: f64,
    pub min_confidence: f64,
    /// Longest itemset to mine; unbounded when absent.
    pub max_len: Option<ItemsetLength>,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: defaults::DEFAULT_MIN_SUPPORT_PERCENT,
            min_confidence: defaults::DEFAULT_MIN_CONFIDENCE_PERCENT,
            max_len: None,
        }
    }
}

impl MiningConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<()> {
        check_percentage("min_support", self.min_support)?;
        check_percentage("min_confidence", self.min_confidence)?;
        if self.max_len == Some(0) {
            return Err(AprioriError::InvalidMaxLen);
        }
        Ok(())
    }

    pub fn min_support_count(&self, num_transactions: usize) -> u32 {
        min_support_count(self.min_support, num_transactions)
    }

    /// Confidence threshold as a fraction in [0, 1].
    pub fn min_confidence(&self) -> f64 {
        self.min_confidence / 100.0
    }
}

fn check_percentage(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(AprioriError::InvalidPercentage { name, value })
    }
}
