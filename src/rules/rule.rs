use std::fmt::{Display, Formatter, Result};

use bitvec::prelude::*;

use crate::{
    inventory::Inventory,
    types::{ItemId, Itemset},
};

/// Association rule over interned ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    /// Support count of antecedent ∪ consequent.
    pub support: u32,
    pub confidence: f64,
}

impl Rule {
    /// Split `combi` by an antecedent membership mask: bit j set puts the
    /// j-th item in the antecedent, otherwise in the consequent.
    pub fn from_mask(combi: &[ItemId], mask: usize, support: u32) -> Self {
        let bits = mask.view_bits::<Lsb0>();
        let (antecedent, consequent): (Vec<(ItemId, bool)>, Vec<(ItemId, bool)>) = combi
            .iter()
            .copied()
            .zip(bits.iter().by_vals())
            .partition(|&(_, in_antecedent)| in_antecedent);

        Self {
            antecedent: antecedent.into_iter().map(|(item, _)| item).collect(),
            consequent: consequent.into_iter().map(|(item, _)| item).collect(),
            support,
            confidence: 0.0,
        }
    }

    pub fn get_antecedent(&self) -> &[ItemId] {
        &self.antecedent
    }

    pub fn get_consequent(&self) -> &[ItemId] {
        &self.consequent
    }

    pub fn named(&self, inventory: &Inventory) -> AssociationRule {
        AssociationRule {
            antecedent: inventory.names(self.get_antecedent()),
            consequent: inventory.names(self.get_consequent()),
            support: self.support,
            confidence: self.confidence,
        }
    }
}

/// Association rule over item labels.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationRule {
    pub antecedent: Vec<String>,
    pub consequent: Vec<String>,
    pub support: u32,
    pub confidence: f64,
}

impl AssociationRule {
    /// Confidence as a whole percentage, rounded half away from zero.
    pub fn confidence_percent(&self) -> f64 {
        (self.confidence * 100.0).round()
    }
}

impl Display for AssociationRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{{{}}} -> {{{}}} [Sup: {}, Conf: {}%]",
            self.antecedent.join(", "),
            self.consequent.join(", "),
            self.support,
            self.confidence_percent()
        )
    }
}
