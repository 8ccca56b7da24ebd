use std::collections::HashSet;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{IntoPyDict, PyDict, PyFrozenSet};
use pyo3::wrap_pyfunction;

use crate::{
    config::MiningConfig, itemsets::table::FrequentTable, types::RawTransaction,
    AssociationRule, AprioriError,
};

type PyRule = (Vec<String>, Vec<String>, u32, f64);

macro_rules! pyfrozenset {
    ($py:expr,$x:expr) => {{
        let set: Py<PyFrozenSet> = PyFrozenSet::new($py, &$x)?.into();
        set
    }};
}

#[pymodule]
fn apriori(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(apriori_rules, m)?)?;
    Ok(())
}

/// Apriori algorithm for association rules.
///
/// Thresholds are fractions in [0, 1]. Returns `({level: {frozenset: count}}, rules)`.
#[pyfunction]
#[pyo3(
    name = "apriori",
    text_signature = "(transactions, min_support, min_confidence, max_len=None)"
)]
fn apriori_rules(
    transactions: Vec<Vec<String>>,
    min_support: f64,
    min_confidence: f64,
    max_len: Option<usize>,
) -> PyResult<(Py<PyDict>, Vec<PyRule>)> {
    let raw_transactions: Vec<RawTransaction> = transactions
        .iter()
        .map(|transaction| transaction.iter().map(String::as_str).collect::<HashSet<_>>())
        .collect();
    let config = MiningConfig {
        min_support: min_support * 100.0,
        min_confidence: min_confidence * 100.0,
        max_len,
    };

    let (table, rules) = crate::run(&raw_transactions, &config).map_err(to_py_err)?;

    Ok((convert_itemset_counts(&table)?, convert_rules(rules)))
}

fn to_py_err(err: AprioriError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn convert_itemset_counts(table: &FrequentTable) -> PyResult<Py<PyDict>> {
    Python::with_gil(|py| {
        let mut levels = Vec::with_capacity(table.levels().len());
        for (&size, itemset_counts) in table.levels() {
            let mut py_itemset_counts = Vec::with_capacity(itemset_counts.len());
            for (itemset, &count) in itemset_counts {
                let names = table.inventory().names(itemset);
                py_itemset_counts.push((pyfrozenset![py, names], count));
            }
            let py_itemset_counts: Py<PyDict> = py_itemset_counts.into_py_dict(py).into();
            levels.push((size, py_itemset_counts));
        }
        Ok(levels.into_py_dict(py).into())
    })
}

fn convert_rules(rules: Vec<AssociationRule>) -> Vec<PyRule> {
    rules
        .into_iter()
        .map(|rule| {
            (
                rule.antecedent,
                rule.consequent,
                rule.support,
                rule.confidence,
            )
        })
        .collect()
}
