//! Command-line interface definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;

use apriori::MiningConfig;

/// Mine frequent itemsets and association rules with Apriori.
///
/// Without `--input`, a session is read from stdin: the number of
/// transactions, the support percentage, the confidence percentage, then one
/// transaction per line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File with one whitespace-separated transaction per line
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// TOML file with min_support, min_confidence and max_len
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Minimum support percentage, overrides the config file
    #[arg(short, long)]
    pub support: Option<f64>,

    /// Minimum confidence percentage, overrides the config file
    #[arg(short = 'f', long)]
    pub confidence: Option<f64>,

    /// Longest itemset to mine
    #[arg(short = 'k', long)]
    pub max_len: Option<usize>,

    /// Print the frequent itemsets of every level before the rules
    #[arg(long)]
    pub show_itemsets: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Thresholds for `--input` mode: defaults, then the config file, then flags.
    pub fn mining_config(&self) -> apriori::Result<MiningConfig> {
        let mut config = match &self.config {
            Some(path) => MiningConfig::load(path)?,
            None => MiningConfig::default(),
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut MiningConfig) {
        if let Some(support) = self.support {
            config.min_support = support;
        }
        if let Some(confidence) = self.confidence {
            config.min_confidence = confidence;
        }
        if self.max_len.is_some() {
            config.max_len = self.max_len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from(["apriori-rules", "--support", "30", "-f", "90", "-k", "2"]);
        let config = args.mining_config().unwrap();

        assert_eq!(config.min_support, 30.0);
        assert_eq!(config.min_confidence, 90.0);
        assert_eq!(config.max_len, Some(2));
    }

    #[test]
    fn defaults_without_flags() {
        let args = Args::parse_from(["apriori-rules"]);
        assert_eq!(args.mining_config().unwrap(), MiningConfig::default());
        assert!(args.input.is_none());
    }

    #[test]
    fn invalid_flag_values_are_rejected() {
        let args = Args::parse_from(["apriori-rules", "--support", "101"]);
        assert!(args.mining_config().is_err());
    }
}
