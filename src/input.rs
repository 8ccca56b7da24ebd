//! Readers for transaction lists.
//!
//! Two layouts are accepted: a plain list with one transaction per line, and
//! an interactive session whose first three values are the transaction
//! count, the support percentage and the confidence percentage.

use std::collections::HashSet;
use std::io::BufRead;

use crate::{
    config::MiningConfig,
    error::{AprioriError, Result},
    types::RawTransaction,
};

pub type OwnedTransaction = HashSet<String>;

/// Whitespace-separated labels, deduplicated.
pub fn parse_transaction(line: &str) -> OwnedTransaction {
    line.split_whitespace().map(str::to_owned).collect()
}

/// One transaction per non-blank line.
pub fn read_transactions<R: BufRead>(reader: R) -> Result<Vec<OwnedTransaction>> {
    let mut transactions = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            transactions.push(parse_transaction(&line));
        }
    }
    Ok(transactions)
}

/// Thresholds and transactions read in one go.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub config: MiningConfig,
    pub transactions: Vec<OwnedTransaction>,
}

/// Count, support %, confidence % (whitespace or newline separated), then
/// exactly `count` transaction lines. Tokens after the confidence value on its
/// line are discarded. Blank transaction lines are empty transactions.
pub fn read_session<R: BufRead>(reader: R) -> Result<Session> {
    let mut lines = reader.lines().enumerate();
    let mut header: Vec<(usize, String)> = Vec::with_capacity(3);

    while header.len() < 3 {
        let (index, line) = match lines.next() {
            Some((index, line)) => (index, line?),
            None => {
                return Err(AprioriError::MalformedInput {
                    line: header.last().map_or(1, |(line, _)| line + 1),
                    reason: "expected transaction count, support and confidence".to_string(),
                })
            }
        };
        header.extend(
            line.split_whitespace()
                .map(|token| (index + 1, token.to_string())),
        );
    }
    // the rest of the line holding the confidence value is ignored
    header.truncate(3);

    let count: i64 = parse_header(&header[0], "transaction count")?;
    if count <= 0 {
        return Err(AprioriError::InvalidTransactionCount(count));
    }
    let config = MiningConfig {
        min_support: parse_header(&header[1], "support percentage")?,
        min_confidence: parse_header(&header[2], "confidence percentage")?,
        max_len: None,
    };
    config.validate()?;

    let mut transactions = Vec::new();
    for expected in 0..count as usize {
        match lines.next() {
            Some((_, line)) => transactions.push(parse_transaction(&line?)),
            None => {
                return Err(AprioriError::MalformedInput {
                    line: header[2].0 + expected + 1,
                    reason: format!("expected {} transactions, found {}", count, expected),
                })
            }
        }
    }

    Ok(Session {
        config,
        transactions,
    })
}

fn parse_header<T: std::str::FromStr>((line, token): &(usize, String), what: &str) -> Result<T> {
    token.parse().map_err(|_| AprioriError::MalformedInput {
        line: *line,
        reason: format!("invalid {}: {:?}", what, token),
    })
}

/// Borrowed view used by the miner.
pub fn as_raw(transactions: &[OwnedTransaction]) -> Vec<RawTransaction<'_>> {
    transactions
        .iter()
        .map(|transaction| transaction.iter().map(String::as_str).collect())
        .collect()
}
