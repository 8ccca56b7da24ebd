//! Apriori association rule miner.
//!
//! Reads transactions, mines the frequent itemsets level by level and prints
//! every rule that meets the confidence threshold.

mod cli;

use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use apriori::input::{self, OwnedTransaction};
use apriori::MiningConfig;
use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let (transactions, config) = load(&args)?;
    let raw_transactions = input::as_raw(&transactions);
    let (table, rules) =
        apriori::run(&raw_transactions, &config).context("failed to mine association rules")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.show_itemsets {
        writeln!(out, "--- Frequent Itemsets ---")?;
        write!(out, "{}", table)?;
        writeln!(out)?;
    }

    writeln!(out, "--- Association Rules ---")?;
    for rule in &rules {
        writeln!(out, "{}", rule)?;
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load(args: &Args) -> Result<(Vec<OwnedTransaction>, MiningConfig)> {
    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            let transactions = input::read_transactions(BufReader::new(file))
                .with_context(|| format!("failed to read {}", path.display()))?;
            let config = args.mining_config().context("invalid mining configuration")?;
            Ok((transactions, config))
        }
        None => {
            let session = input::read_session(io::stdin().lock())
                .context("failed to read session from stdin")?;
            let mut config = session.config;
            args.apply_overrides(&mut config);
            config.validate().context("invalid mining configuration")?;
            Ok((session.transactions, config))
        }
    }
}
