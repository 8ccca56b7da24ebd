use tracing::debug;

use crate::{
    error::{AprioriError, Result},
    rules::rule::Rule,
    types::{FrequentItemsets, ItemId},
};

/// Generate rules based on frequent itemsets
///
/// Levels are visited ascending, itemsets in stored order, and each itemset's
/// antecedent masks ascending, so the output order is deterministic.
pub fn generate_rules(counter: &FrequentItemsets, min_conf: f64) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();

    for (_, itemset_counts) in counter.range(2..) {
        for (combi, &support) in itemset_counts {
            rules.extend(partition(combi, support, min_conf, counter)?);
        }
    }

    debug!(rules = rules.len(), min_conf, "generated rules");
    Ok(rules)
}

/// All 2^n - 2 antecedent/consequent splits of `combi` meeting `min_conf`.
pub fn partition(
    combi: &[ItemId],
    support: u32,
    min_conf: f64,
    counter: &FrequentItemsets,
) -> Result<Vec<Rule>> {
    let n = combi.len();
    if n >= usize::BITS as usize {
        return Err(AprioriError::ItemsetTooLarge(n));
    }

    let mut final_rules = vec![];

    for mask in 1..(1_usize << n) - 1 {
        let mut rule = Rule::from_mask(combi, mask, support);
        let antecedent_support = counter
            .get(&rule.antecedent.len())
            .and_then(|itemset_counts| itemset_counts.get(&rule.antecedent))
            .copied()
            .ok_or_else(|| AprioriError::MissingAntecedentSupport {
                itemset: combi.to_vec(),
                antecedent: rule.antecedent.clone(),
            })?;

        rule.confidence = f64::from(support) / f64::from(antecedent_support);
        if rule.confidence >= min_conf {
            final_rules.push(rule);
        }
    }

    Ok(final_rules)
}
